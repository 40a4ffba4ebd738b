//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::{Snowflake, ViewWindow};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Single-post view
// ============================================================================

/// Which representation of the single-post view to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Complete post page
    #[default]
    Full,
    /// Views chart only, for in-place refreshes
    Partial,
}

/// Per-request flags derived once from the query string and headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestFlags {
    /// `partial=1`: a chart refresh that must not count as a view
    pub chart_refresh: bool,
    pub render: RenderMode,
}

impl RequestFlags {
    /// `partial` is the raw query value; `xhr` is true when the request
    /// carried `X-Requested-With: XMLHttpRequest`.
    pub fn from_request(partial: Option<&str>, xhr: bool) -> Self {
        let partial = partial.map(str::trim);
        let render = if partial.is_some_and(|p| !p.is_empty()) || xhr {
            RenderMode::Partial
        } else {
            RenderMode::Full
        };

        Self {
            chart_refresh: partial == Some("1"),
            render,
        }
    }
}

/// Everything the single-post flow needs to know about one request
#[derive(Debug, Clone)]
pub struct PostViewRequest {
    pub post_id: Snowflake,
    /// Authenticated user from the access token, if any
    pub user_id: Option<Snowflake>,
    /// Anonymous session id from the session cookie
    pub session_id: Option<String>,
    pub window: ViewWindow,
    pub flags: RequestFlags,
    /// Calendar date the view is attributed to
    pub today: NaiveDate,
}

// ============================================================================
// Engagement Requests
// ============================================================================

/// Toggle a reaction; the kind defaults to "like"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ToggleReactionRequest {
    #[validate(length(min = 1, max = 32, message = "Reaction must be 1-32 characters"))]
    pub reaction: Option<String>,
}

impl ToggleReactionRequest {
    pub fn kind(&self) -> &str {
        self.reaction.as_deref().unwrap_or("like")
    }
}

/// Submit a comment for moderation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub body: String,
}

/// Newsletter signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
