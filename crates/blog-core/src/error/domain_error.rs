//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Comment body cannot be empty")]
    EmptyComment,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid reaction: {0:?}")]
    InvalidReaction(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Authentication as an author is required")]
    AuthenticationRequired,

    // =========================================================================
    // Precondition Failures
    // =========================================================================
    #[error("Post is not available")]
    PostUnavailable,

    #[error("Cannot react to your own post")]
    SelfReaction,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::AuthorNotFound(_) => "UNKNOWN_AUTHOR",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TagNotFound(_) => "UNKNOWN_TAG",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidReaction(_) => "INVALID_REACTION",

            // Authentication
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",

            // Preconditions
            Self::PostUnavailable => "POST_UNAVAILABLE",
            Self::SelfReaction => "SELF_REACTION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::UserNotFound(_)
                | Self::AuthorNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TagNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyComment
                | Self::ContentTooLong { .. }
                | Self::InvalidReaction(_)
        )
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::AuthenticationRequired)
    }

    /// Request was well-formed but the target is in the wrong state for it
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::PostUnavailable | Self::SelfReaction)
    }
}
