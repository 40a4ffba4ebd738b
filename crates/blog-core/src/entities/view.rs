//! Daily view counter - views of one post on one calendar day

use chrono::NaiveDate;

use crate::value_objects::Snowflake;

/// Counter keyed by (post, date). At most one exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyViewCounter {
    pub post_id: Snowflake,
    pub date: NaiveDate,
    pub views: i64,
}

impl DailyViewCounter {
    pub fn new(post_id: Snowflake, date: NaiveDate, views: i64) -> Self {
        Self {
            post_id,
            date,
            views,
        }
    }
}
