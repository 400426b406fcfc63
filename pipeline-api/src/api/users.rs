//! User list endpoint

use axum::{extract::State, Json};
use pipeline_common::api::UsersResponse;

use crate::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse::new(state.users.to_vec()))
}
