//! Viewer identity - who is looking at a post

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snowflake;
use crate::entities::Post;

/// Account role carried by an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Regular,
    Staff,
    Admin,
}

impl UserRole {
    /// Staff and admins may see posts that are not published
    #[inline]
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored role; unknown values fall back to `Regular`
    pub fn parse(s: &str) -> Self {
        match s {
            "staff" => Self::Staff,
            "admin" => Self::Admin,
            _ => Self::Regular,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved identity of whoever issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// No authenticated identity
    Anonymous,
    /// Signed-in user without an author profile
    AuthenticatedNoProfile { user_id: Snowflake, role: UserRole },
    /// Signed-in user with an author profile
    Author {
        user_id: Snowflake,
        author_id: Snowflake,
        role: UserRole,
    },
}

impl Viewer {
    pub fn user_id(&self) -> Option<Snowflake> {
        match self {
            Self::Anonymous => None,
            Self::AuthenticatedNoProfile { user_id, .. } | Self::Author { user_id, .. } => {
                Some(*user_id)
            }
        }
    }

    pub fn author_id(&self) -> Option<Snowflake> {
        match self {
            Self::Author { author_id, .. } => Some(*author_id),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::Anonymous => None,
            Self::AuthenticatedNoProfile { role, .. } | Self::Author { role, .. } => Some(*role),
        }
    }

    #[inline]
    pub fn is_elevated(&self) -> bool {
        self.role().is_some_and(UserRole::is_elevated)
    }

    /// True when this viewer wrote the given post
    #[inline]
    pub fn is_author_of(&self, post: &Post) -> bool {
        self.author_id() == Some(post.author_id)
    }
}

/// Key under which first-time views are deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewerIdentity {
    /// Durable identity, deduplicated in the database
    User(Snowflake),
    /// Anonymous session id, deduplicated in session-scoped state
    Session(String),
}

impl ViewerIdentity {
    /// Pick the dedup key: the signed-in user if any, else the session
    pub fn for_viewer(viewer: &Viewer, session_id: Option<&str>) -> Option<Self> {
        match viewer.user_id() {
            Some(user_id) => Some(Self::User(user_id)),
            None => session_id.map(|id| Self::Session(id.to_string())),
        }
    }
}
