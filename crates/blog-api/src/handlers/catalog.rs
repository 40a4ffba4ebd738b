//! Catalog handlers
//!
//! Category, tag, search and author listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use blog_service::dto::{
    AuthorProfileResponse, CategoryPageResponse, SearchResponse, TagPageResponse,
    TopCategoryResponse,
};
use blog_service::CatalogService;
use serde::Deserialize;

use crate::extractors::{Pagination, TagIdPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

const CATEGORY_PAGE_SIZE: i64 = 3;

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Navigation categories
///
/// GET /categories/top
pub async fn top_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TopCategoryResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.top_categories().await?))
}

/// Posts in a category
///
/// GET /categories/{slug}/posts?limit&before
pub async fn category_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    pagination: Pagination,
) -> ApiResult<Json<CategoryPageResponse>> {
    let service = CatalogService::new(state.service_context());
    let page = service
        .category_page(
            &slug,
            pagination.limit_or(CATEGORY_PAGE_SIZE),
            pagination.before,
        )
        .await?;
    Ok(Json(page))
}

/// Posts with a tag
///
/// GET /tags/{tag_id}/posts
pub async fn tag_posts(
    State(state): State<AppState>,
    Path(path): Path<TagIdPath>,
) -> ApiResult<Json<TagPageResponse>> {
    let tag_id = path.tag_id()?;

    let service = CatalogService::new(state.service_context());
    Ok(Json(service.tag_page(tag_id).await?))
}

/// Full-text search over published posts
///
/// GET /search?q=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = CatalogService::new(state.service_context());
    Ok(Json(service.search(&query.q).await?))
}

/// Author profile with their published posts
///
/// GET /authors/{username}
pub async fn author_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<AuthorProfileResponse>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.author_profile(&username).await?))
}
