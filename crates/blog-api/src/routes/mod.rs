//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{catalog, comments, health, posts, reactions, subscriptions};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(catalog_routes())
        .route("/subscriptions", post(subscriptions::subscribe))
}

/// Post and engagement routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::home_feed))
        .route("/posts/:post_id", get(posts::view_post))
        .route("/posts/:post_id/reactions", post(reactions::toggle_reaction))
        .route("/posts/:post_id/comments", post(comments::create_comment))
}

/// Category, tag, search and author routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories/top", get(catalog::top_categories))
        .route("/categories/:slug/posts", get(catalog::category_posts))
        .route("/tags/:tag_id/posts", get(catalog::tag_posts))
        .route("/search", get(catalog::search))
        .route("/authors/:username", get(catalog::author_profile))
}
