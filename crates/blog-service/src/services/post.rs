//! Single-post service
//!
//! Runs the post view flow: visibility gate, view counting, the views chart
//! and the reader's engagement state.

use blog_core::{
    can_view, should_count_view, should_display_engagement, Post, ReactionState, Snowflake,
    ViewSeries, Viewer, ViewerIdentity,
};
use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::dto::mappers::post_list;
use crate::dto::{
    CommentResponse, PostPageResponse, PostResponse, PostViewRequest, PostViewResponse,
    RenderMode, ViewChartResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::view_ledger::ViewLedger;
use super::view_report::ViewReportService;
use super::viewer::ViewerService;

/// Related posts shown under a post
const RELATED_POSTS_LIMIT: i64 = 4;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a post the viewer is allowed to see.
    ///
    /// Hidden posts fail exactly like missing ones.
    pub async fn get_visible(&self, post_id: Snowflake, viewer: &Viewer) -> ServiceResult<Post> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !can_view(&post, viewer) {
            debug!(post_id = %post_id, status = %post.status, "Post hidden from viewer");
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }
        Ok(post)
    }

    /// Serve one post view
    #[instrument(skip(self, request), fields(post_id = %request.post_id))]
    pub async fn view_post(&self, request: PostViewRequest) -> ServiceResult<PostViewResponse> {
        let viewer = ViewerService::new(self.ctx).resolve(request.user_id).await?;
        let mut post = self.get_visible(request.post_id, &viewer).await?;

        if should_count_view(&post, &viewer, request.flags.chart_refresh) {
            self.count_view(&mut post, &viewer, request.session_id.as_deref(), request.today)
                .await?;
        }

        let show = should_display_engagement(&post);
        let series = if show {
            ViewReportService::new(self.ctx)
                .build_series(post.id, request.window, request.today)
                .await?
        } else {
            ViewSeries::suppressed(request.window)
        };
        let chart = ViewChartResponse::from_series(&series, show);

        if request.flags.render == RenderMode::Partial {
            return Ok(PostViewResponse::Partial(chart));
        }

        let page = self.full_page(&post, &viewer, show, chart).await?;
        Ok(PostViewResponse::Full(Box::new(page)))
    }

    async fn count_view(
        &self,
        post: &mut Post,
        viewer: &Viewer,
        session_id: Option<&str>,
        today: NaiveDate,
    ) -> ServiceResult<()> {
        let Some(identity) = ViewerIdentity::for_viewer(viewer, session_id) else {
            debug!(post_id = %post.id, "No identity to deduplicate against, view not counted");
            return Ok(());
        };

        if ViewLedger::new(self.ctx)
            .record_view(post.id, &identity, today)
            .await?
        {
            post.visit_count += 1;
        }
        Ok(())
    }

    async fn full_page(
        &self,
        post: &Post,
        viewer: &Viewer,
        show: bool,
        views: ViewChartResponse,
    ) -> ServiceResult<PostPageResponse> {
        let can_like = viewer.author_id().is_some() && !viewer.is_author_of(post);
        let reaction = match viewer.author_id() {
            Some(author_id) if can_like => {
                self.ctx.reaction_repo().find(post.id, author_id).await?
            }
            _ => None,
        };
        let state = ReactionState::from_existing(reaction.as_ref());

        let likes_count = if show {
            self.ctx.reaction_repo().count_likes(post.id).await?
        } else {
            0
        };

        let comments = self
            .ctx
            .comment_repo()
            .find_approved_by_post(post.id)
            .await?;
        let related = self
            .ctx
            .post_repo()
            .find_related(post.author_id, post.id, RELATED_POSTS_LIMIT)
            .await?;

        let mut post_dto = PostResponse::from(post);
        if !show {
            post_dto.visit_count = 0;
        }

        Ok(PostPageResponse {
            post: post_dto,
            likes_count,
            can_like,
            user_has_liked: state.liked,
            user_reaction: state.current_kind.map(|k| k.as_str().to_string()),
            comments: comments.iter().map(CommentResponse::from).collect(),
            related: post_list(&related),
            views,
        })
    }
}
