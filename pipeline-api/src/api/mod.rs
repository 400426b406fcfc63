//! HTTP API handlers for pipeline-api

pub mod health;
pub mod not_found;
pub mod users;
pub mod welcome;

pub use health::health;
pub use not_found::route_not_found;
pub use users::list_users;
pub use welcome::welcome;
