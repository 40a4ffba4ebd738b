//! Reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::{ReactionToggleResponse, ToggleReactionRequest};
use blog_service::ReactionService;

use crate::extractors::{OptionalAuthUser, OptionalValidatedJson, PostIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the caller's reaction on a post
///
/// POST /posts/{post_id}/reactions
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<PostIdPath>,
    OptionalValidatedJson(body): OptionalValidatedJson<ToggleReactionRequest>,
) -> ApiResult<Json<ReactionToggleResponse>> {
    let post_id = path.post_id()?;
    let body = body.unwrap_or_default();

    let service = ReactionService::new(state.service_context());
    let response = service
        .toggle(post_id, auth.user_id(), body.kind())
        .await?;
    Ok(Json(response))
}
