//! Shared API response types

use serde::{Deserialize, Serialize};

use crate::users::User;

/// Fixed greeting returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to MERN CI/CD Pipeline Demo!";

/// Status reported by `GET /api/health`
pub const HEALTHY: &str = "healthy";

/// Message carried by every 404 response
pub const ROUTE_NOT_FOUND: &str = "Route not found";

// ========================================
// Success Response Types
// ========================================

/// Response body for `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    /// ISO-8601 time the response was generated
    pub timestamp: String,
    pub version: String,
}

/// Response body for `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since process start
    pub uptime: f64,
    /// ISO-8601 time the response was generated
    pub timestamp: String,
}

/// Response body for `GET /api/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

impl UsersResponse {
    /// Build a response whose `count` always matches the list length
    pub fn new(users: Vec<User>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}

// ========================================
// Error Response Types
// ========================================

/// Error response body
///
/// # Examples
///
/// ```
/// use pipeline_common::api::types::ErrorResponse;
///
/// let body = ErrorResponse::new("Route not found");
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"error":"Route not found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
