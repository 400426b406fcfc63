//! Catch-all handler for unmatched routes

use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::ApiError;

/// Fallback for any path or method without a handler
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    debug!("No route for {} {}", method, uri.path());
    ApiError::RouteNotFound
}
