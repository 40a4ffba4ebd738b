//! Reaction entity - an author's reaction to a post

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum length of a reaction kind tag
pub const MAX_REACTION_KIND_LENGTH: usize = 32;

/// Kind of reaction. Every kind except `Dislike` counts toward the like tally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ReactionKind {
    #[default]
    Like,
    Dislike,
    Custom(String),
}

impl ReactionKind {
    /// Parse a requested kind tag
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        if s.is_empty() || s.chars().count() > MAX_REACTION_KIND_LENGTH {
            return Err(DomainError::InvalidReaction(s.to_string()));
        }
        Ok(Self::from_tag(s))
    }

    /// Map a known-good tag, such as one already stored, to its kind
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "like" => Self::Like,
            "dislike" => Self::Dislike,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Custom(tag) => tag,
        }
    }

    #[inline]
    pub fn counts_as_like(&self) -> bool {
        !matches!(self, Self::Dislike)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity, unique per (post, author)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(post_id: Snowflake, author_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            post_id,
            author_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
