//! API module for shared HTTP API types
//!
//! Contains only serde bodies (no HTTP framework dependencies) so clients
//! and tests can decode responses with the same types the server encodes.

pub mod types;

pub use types::{ErrorResponse, HealthResponse, UsersResponse, WelcomeResponse};
