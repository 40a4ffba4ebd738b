//! Comment service
//!
//! Signed-in readers submit comments; they stay hidden until approved.

use blog_common::AppError;
use blog_core::entities::MAX_COMMENT_LENGTH;
use blog_core::{Comment, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentCreatedResponse, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::PostService;
use super::viewer::ViewerService;

const AWAITING_APPROVAL: &str =
    "Your comment has been sent to the author and is awaiting approval.";

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a comment for moderation, signed with the commenter's username
    #[instrument(skip(self, body))]
    pub async fn submit(
        &self,
        post_id: Snowflake,
        user_id: Option<Snowflake>,
        body: &str,
    ) -> ServiceResult<CommentCreatedResponse> {
        let user_id = user_id.ok_or(AppError::MissingAuth)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::MissingAuth)?;

        let viewer = ViewerService::new(self.ctx).for_user(&user).await?;
        let post = PostService::new(self.ctx).get_visible(post_id, &viewer).await?;

        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::EmptyComment.into());
        }
        if body.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            }
            .into());
        }

        let comment = Comment::pending(
            self.ctx.generate_id(),
            post.id,
            user.id,
            user.username,
            body.to_string(),
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            post_id = %post.id,
            user_id = %user.id,
            "Comment submitted for approval"
        );

        Ok(CommentCreatedResponse {
            comment: CommentResponse::from(&comment),
            message: AWAITING_APPROVAL.to_string(),
        })
    }
}
