//! Error types for pipeline-api
//!
//! Handler errors map onto an HTTP status plus an `{"error": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pipeline_common::api::ErrorResponse;
use thiserror::Error;

/// API error returned from handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No route matched the request
    #[error("Route not found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
