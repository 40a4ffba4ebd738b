//! Post handlers
//!
//! The home feed and the single-post view.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::{HomeFeedResponse, PostViewRequest, PostViewResponse};
use blog_service::{CatalogService, PostService};
use chrono::Utc;

use crate::extractors::{AnonymousSession, OptionalAuthUser, Pagination, PostIdPath, PostViewParams};
use crate::response::ApiResult;
use crate::state::AppState;

const HOME_PAGE_SIZE: i64 = 10;

/// Featured posts and the latest posts
///
/// GET /posts?limit&before
pub async fn home_feed(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<HomeFeedResponse>> {
    let service = CatalogService::new(state.service_context());
    let feed = service
        .home_feed(pagination.limit_or(HOME_PAGE_SIZE), pagination.before)
        .await?;
    Ok(Json(feed))
}

/// Single post page, or the views chart alone for partial requests
///
/// GET /posts/{post_id}?views_range=1|3|7&partial=1
pub async fn view_post(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    session: AnonymousSession,
    Path(path): Path<PostIdPath>,
    params: PostViewParams,
) -> ApiResult<(AnonymousSession, Json<PostViewResponse>)> {
    let request = PostViewRequest {
        post_id: path.post_id()?,
        user_id: auth.user_id(),
        session_id: Some(session.id().to_string()),
        window: params.window,
        flags: params.flags,
        today: Utc::now().date_naive(),
    };

    let service = PostService::new(state.service_context());
    let response = service.view_post(request).await?;
    Ok((session, Json(response)))
}
