//! # Pipeline Demo Common Library
//!
//! Shared code for the MERN CI/CD Pipeline Demo service including:
//! - API response types
//! - Configuration loading
//! - Static user roster
//! - Timestamp and uptime utilities

pub mod api;
pub mod config;
pub mod error;
pub mod time;
pub mod users;

pub use error::{Error, Result};
pub use users::User;
