//! Root welcome endpoint

use axum::Json;
use pipeline_common::api::types::{WelcomeResponse, WELCOME_MESSAGE};
use pipeline_common::time;

use crate::SERVICE_VERSION;

/// GET /
///
/// Returns the fixed welcome message, the current time and the service version.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
        timestamp: time::now_iso8601(),
        version: SERVICE_VERSION.to_string(),
    })
}
