//! Viewer service
//!
//! Turns an optional authenticated user id into a [`Viewer`].

use blog_core::{Snowflake, User, Viewer};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Viewer resolution service
pub struct ViewerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViewerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve who is making the request.
    ///
    /// A token whose user no longer exists resolves to `Anonymous`.
    #[instrument(skip(self))]
    pub async fn resolve(&self, user_id: Option<Snowflake>) -> ServiceResult<Viewer> {
        let Some(user_id) = user_id else {
            return Ok(Viewer::Anonymous);
        };

        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(user) => self.for_user(&user).await,
            None => {
                tracing::debug!(user_id = %user_id, "Token user no longer exists");
                Ok(Viewer::Anonymous)
            }
        }
    }

    /// Viewer for an already loaded user
    pub async fn for_user(&self, user: &User) -> ServiceResult<Viewer> {
        let viewer = match self.ctx.author_repo().find_by_user(user.id).await? {
            Some(author) => Viewer::Author {
                user_id: user.id,
                author_id: author.id,
                role: user.role,
            },
            None => Viewer::AuthenticatedNoProfile {
                user_id: user.id,
                role: user.role,
            },
        };
        Ok(viewer)
    }
}
