//! View-dedup ledger
//!
//! Counts a view only on the identity's first view of the post. Signed-in
//! users are tracked durably in the database, claimed together with the
//! counters. Anonymous sessions use a session-scoped set that expires with the
//! session; the mark is withdrawn again if the counters cannot be written.

use blog_core::{Snowflake, ViewerIdentity};
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::view_aggregator::ViewAggregator;

pub struct ViewLedger<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViewLedger<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record the view; `true` only when it was the identity's first view of
    /// the post and has been counted for `today`.
    ///
    /// On error nothing is recorded, so a retry is still a first view.
    #[instrument(skip(self, identity))]
    pub async fn record_view(
        &self,
        post_id: Snowflake,
        identity: &ViewerIdentity,
        today: NaiveDate,
    ) -> ServiceResult<bool> {
        match identity {
            ViewerIdentity::User(user_id) => {
                let counted = self
                    .ctx
                    .first_view_repo()
                    .claim_and_count(post_id, *user_id, today)
                    .await?;
                if counted {
                    info!(post_id = %post_id, date = %today, "First-time view counted");
                }
                Ok(counted)
            }
            ViewerIdentity::Session(session_id) => {
                let store = self.ctx.session_view_store();
                if !store.mark_seen(session_id, post_id).await? {
                    return Ok(false);
                }

                if let Err(e) = ViewAggregator::new(self.ctx)
                    .on_first_view(post_id, today)
                    .await
                {
                    if let Err(undo) = store.unmark_seen(session_id, post_id).await {
                        warn!(post_id = %post_id, error = %undo, "Failed to withdraw session view");
                    }
                    return Err(e);
                }
                Ok(true)
            }
        }
    }
}
