//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, PostViewRequest, RenderMode, RequestFlags, SubscribeRequest,
    ToggleReactionRequest,
};

pub use responses::{
    AuthorProfileResponse, AuthorResponse, CategoryPageResponse, CategoryResponse,
    CommentCreatedResponse, CommentResponse, DailyViewsResponse, HealthChecks, HealthResponse, HomeFeedResponse,
    PaginatedResponse, PaginationMeta, PostPageResponse, PostResponse, PostViewResponse,
    ReactionToggleResponse, ReadinessResponse, SearchResponse, SubscriptionResponse,
    TagPageResponse, TagResponse, TopCategoryResponse, ViewChartResponse,
};
