//! Time-window view reports

use blog_core::{Snowflake, ViewSeries, ViewWindow};
use chrono::NaiveDate;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ViewReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViewReportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Per-day series for the window ending at `today`. Read-only.
    #[instrument(skip(self))]
    pub async fn build_series(
        &self,
        post_id: Snowflake,
        window: ViewWindow,
        today: NaiveDate,
    ) -> ServiceResult<ViewSeries> {
        let counters = self
            .ctx
            .view_counter_repo()
            .find_daily_counts(post_id, window.start_date(today), today)
            .await?;

        Ok(ViewSeries::build(window, today, &counters))
    }
}
