//! Health check endpoint

use axum::{extract::State, Json};
use pipeline_common::api::types::{HealthResponse, HEALTHY};
use pipeline_common::time;

use crate::AppState;

/// GET /api/health
///
/// Always reports `healthy`; `uptime` is seconds since the state was created.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        uptime: state.clock.uptime_secs(),
        timestamp: time::now_iso8601(),
    })
}
