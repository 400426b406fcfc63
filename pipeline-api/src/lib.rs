//! pipeline-api library - MERN CI/CD Pipeline Demo HTTP API
//!
//! Serves a welcome message, a health check and a fixed user list as JSON.
//! Every other route answers 404 `{"error": "Route not found"}`.

use std::sync::Arc;

use axum::Router;
use pipeline_common::time::UptimeClock;
use pipeline_common::users::{self, User};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod server;

/// Version reported by `GET /`
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application state shared across HTTP handlers
///
/// Read-only after construction; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Started when the state is created at process startup
    pub clock: UptimeClock,
    /// Static user roster
    pub users: Arc<[User]>,
}

impl AppState {
    /// Create new application state, starting the uptime clock
    pub fn new() -> Self {
        Self {
            clock: UptimeClock::start(),
            users: users::roster(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build application router
///
/// Non-GET methods on known paths fall through to the 404 handler, same as
/// unknown paths.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::welcome).fallback(api::route_not_found))
        .route("/api/health", get(api::health).fallback(api::route_not_found))
        .route("/api/users", get(api::list_users).fallback(api::route_not_found))
        .fallback(api::route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
