//! Author entity - the publishing profile attached to a user

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Author profile. A user has at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Snowflake,
    pub user_id: Snowflake,
    /// Username of the owning user, joined in for display
    pub username: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(id: Snowflake, user_id: Snowflake, username: String) -> Self {
        Self {
            id,
            user_id,
            username,
            bio: None,
            created_at: Utc::now(),
        }
    }
}
