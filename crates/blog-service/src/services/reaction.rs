//! Reaction service
//!
//! Toggles an author's reaction on a post. At most one reaction exists per
//! (post, author); requesting the stored kind again removes it.

use blog_core::{DomainError, ReactionChange, ReactionKind, ReactionState, Snowflake, Viewer};
use tracing::{info, instrument};

use crate::dto::ReactionToggleResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::viewer::ViewerService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle `requested` on the post for the signed-in author.
    ///
    /// Precondition failures carry the current like count.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        post_id: Snowflake,
        user_id: Option<Snowflake>,
        requested: &str,
    ) -> ServiceResult<ReactionToggleResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let viewer = ViewerService::new(self.ctx).resolve(user_id).await?;
        let Viewer::Author { author_id, .. } = viewer else {
            return Err(self.reject(DomainError::AuthenticationRequired, post_id).await);
        };
        if !post.is_published() {
            return Err(self.reject(DomainError::PostUnavailable, post_id).await);
        }
        if viewer.is_author_of(&post) {
            return Err(self.reject(DomainError::SelfReaction, post_id).await);
        }

        let kind = ReactionKind::parse(requested)?;
        let change = self
            .ctx
            .reaction_repo()
            .toggle(post_id, author_id, &kind)
            .await?;

        let action = match &change {
            ReactionChange::Create(_) => "created",
            ReactionChange::Replace(_) => "replaced",
            ReactionChange::Remove => "removed",
        };
        info!(
            post_id = %post_id,
            author_id = %author_id,
            reaction = %kind,
            action,
            "Reaction toggled"
        );

        let likes_count = self.ctx.reaction_repo().count_likes(post_id).await?;
        Ok(ReactionToggleResponse::new(
            &ReactionState::from(&change),
            likes_count,
        ))
    }

    async fn reject(&self, reason: DomainError, post_id: Snowflake) -> ServiceError {
        match self.ctx.reaction_repo().count_likes(post_id).await {
            Ok(likes_count) => ServiceError::reaction_rejected(reason, likes_count),
            Err(e) => e.into(),
        }
    }
}
