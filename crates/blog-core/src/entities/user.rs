//! User entity - an account that can sign in

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserRole};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new regular user
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            role: UserRole::Regular,
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}
