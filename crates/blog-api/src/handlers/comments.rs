//! Comment handlers

use axum::extract::{Path, State};
use blog_service::dto::{CommentCreatedResponse, CreateCommentRequest};
use blog_service::CommentService;

use crate::extractors::{AuthUser, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a comment for moderation
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(body): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentCreatedResponse>> {
    let post_id = path.post_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .submit(post_id, Some(auth.user_id), &body.body)
        .await?;
    Ok(Created(response))
}
