//! Comment entity - reader feedback held for moderation

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum comment body length in characters
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    /// Display name, taken from the commenter's username
    pub name: String,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment awaiting approval
    pub fn pending(
        id: Snowflake,
        post_id: Snowflake,
        user_id: Snowflake,
        name: String,
        body: String,
    ) -> Self {
        Self {
            id,
            post_id,
            user_id,
            name,
            body,
            is_approved: false,
            created_at: Utc::now(),
        }
    }
}
