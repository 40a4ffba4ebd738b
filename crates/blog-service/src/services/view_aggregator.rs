//! Daily view aggregator

use blog_core::Snowflake;
use chrono::NaiveDate;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ViewAggregator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViewAggregator<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count a genuine first-time view: bumps the lifetime counter and the
    /// counter for `today` in one unit of work.
    #[instrument(skip(self))]
    pub async fn on_first_view(&self, post_id: Snowflake, today: NaiveDate) -> ServiceResult<()> {
        self.ctx
            .view_counter_repo()
            .record_first_view(post_id, today)
            .await?;

        info!(post_id = %post_id, date = %today, "First-time view counted");
        Ok(())
    }
}
