//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use blog_core::DailyViews;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Cursor-paginated list, newest first
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, next_before: Option<String>, has_more: bool, limit: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                next_before,
                has_more,
                limit,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    /// Cursor for fetching the next (older) page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_before: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub title: String,
    pub detail: String,
    pub status: String,
    pub visible: bool,
    pub featured: bool,
    pub visit_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub name: String,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// One day of the views chart
#[derive(Debug, Clone, Serialize)]
pub struct DailyViewsResponse {
    pub date: NaiveDate,
    pub views: i64,
    pub height_pct: u32,
}

impl From<&DailyViews> for DailyViewsResponse {
    fn from(day: &DailyViews) -> Self {
        Self {
            date: day.date,
            views: day.views,
            height_pct: day.height_pct,
        }
    }
}

/// Views chart for the selected window
#[derive(Debug, Clone, Serialize)]
pub struct ViewChartResponse {
    pub views_range: String,
    pub views_range_label: String,
    pub show_views_likes: bool,
    pub series: Vec<DailyViewsResponse>,
    pub total: i64,
    pub max_views: i64,
}

/// Complete single-post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPageResponse {
    /// `visit_count` is already zeroed when engagement is hidden
    pub post: PostResponse,
    pub likes_count: i64,
    pub can_like: bool,
    pub user_has_liked: bool,
    pub user_reaction: Option<String>,
    pub comments: Vec<CommentResponse>,
    pub related: Vec<PostResponse>,
    pub views: ViewChartResponse,
}

/// Either the full page or the chart-only partial
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PostViewResponse {
    Full(Box<PostPageResponse>),
    Partial(ViewChartResponse),
}

impl PostViewResponse {
    pub fn chart(&self) -> &ViewChartResponse {
        match self {
            Self::Full(page) => &page.views,
            Self::Partial(chart) => chart,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }
}

// ============================================================================
// Engagement Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReactionToggleResponse {
    pub liked: bool,
    pub reaction: Option<String>,
    pub likes_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentCreatedResponse {
    pub comment: CommentResponse,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub subscribed: bool,
    pub already_subscribed: bool,
    pub message: String,
}

impl SubscriptionResponse {
    pub fn new(already_subscribed: bool) -> Self {
        let message = if already_subscribed {
            "You are already subscribed. Thanks!"
        } else {
            "Thanks for subscribing."
        };
        Self {
            subscribed: true,
            already_subscribed,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HomeFeedResponse {
    pub first: Option<PostResponse>,
    pub second: Option<PostResponse>,
    pub rest: Vec<PostResponse>,
    pub posts: PaginatedResponse<PostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCategoryResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub post_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPageResponse {
    pub category: CategoryResponse,
    pub posts: PaginatedResponse<PostResponse>,
    /// Most viewed post in the category
    pub featured: Option<PostResponse>,
    /// The next most viewed posts
    pub popular: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagPageResponse {
    pub tag: TagResponse,
    pub posts: Vec<PostResponse>,
    pub tag_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorProfileResponse {
    pub author: AuthorResponse,
    pub posts: Vec<PostResponse>,
    pub total_views: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
