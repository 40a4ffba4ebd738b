//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::{
    Author, Category, CategoryPostCount, Comment, Post, ReactionState, Tag, ViewSeries,
};

use super::responses::{
    AuthorResponse, CategoryResponse, CommentResponse, DailyViewsResponse, PostResponse,
    ReactionToggleResponse, TagResponse, TopCategoryResponse, ViewChartResponse,
};

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            category_id: post.category_id.map(|id| id.to_string()),
            title: post.title.clone(),
            detail: post.detail.clone(),
            status: post.status.as_str().to_string(),
            visible: post.visible,
            featured: post.featured,
            visit_count: post.visit_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

/// Map a list of posts
pub fn post_list(posts: &[Post]) -> Vec<PostResponse> {
    posts.iter().map(PostResponse::from).collect()
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            name: comment.name.clone(),
            body: comment.body.clone(),
            is_approved: comment.is_approved,
            created_at: comment.created_at,
        }
    }
}

impl ViewChartResponse {
    /// Chart payload for a series; `show_views_likes` is false when the
    /// series has been suppressed
    pub fn from_series(series: &ViewSeries, show_views_likes: bool) -> Self {
        Self {
            views_range: series.window.as_param().to_string(),
            views_range_label: series.window.label().to_string(),
            show_views_likes,
            series: series.days.iter().map(DailyViewsResponse::from).collect(),
            total: series.total,
            max_views: series.max_views,
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl ReactionToggleResponse {
    pub fn new(state: &ReactionState, likes_count: i64) -> Self {
        Self {
            liked: state.liked,
            reaction: state.current_kind.as_ref().map(|k| k.as_str().to_string()),
            likes_count,
        }
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

impl From<&CategoryPostCount> for TopCategoryResponse {
    fn from(entry: &CategoryPostCount) -> Self {
        Self {
            category: CategoryResponse::from(&entry.category),
            post_count: entry.post_count,
        }
    }
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
        }
    }
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            username: author.username.clone(),
            bio: author.bio.clone(),
            created_at: author.created_at,
        }
    }
}
