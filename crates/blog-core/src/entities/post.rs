//! Post entity - a blog article and its lifetime view counter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// Editorial status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Pending,
    Active,
    Other,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Other => "other",
        }
    }

    /// Parse a stored status; anything unrecognized is `Other`
    pub fn parse(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "active" => Self::Active,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub category_id: Option<Snowflake>,
    pub title: String,
    pub detail: String,
    pub status: PostStatus,
    pub visible: bool,
    pub featured: bool,
    /// Lifetime count of first-time views
    pub visit_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new draft post
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, detail: String) -> Self {
        Self {
            id,
            author_id,
            category_id: None,
            title,
            detail,
            status: PostStatus::Draft,
            visible: false,
            featured: false,
            visit_count: 0,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Active and visible: readable by everyone, engagement counted and shown
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Active && self.visible
    }

    /// Mark as active and visible
    pub fn publish(&mut self) {
        self.status = PostStatus::Active;
        self.visible = true;
        self.updated_at = Some(Utc::now());
    }
}
