//! Static user roster
//!
//! The demo serves a fixed list of three users. It is built once at
//! startup and never mutated.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Number of users in the roster
pub const ROSTER_SIZE: usize = 3;

/// Build the fixed roster, ordered by id
pub fn roster() -> Arc<[User]> {
    Arc::from(vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::new(3, "Bob Johnson", "bob@example.com"),
    ])
}
