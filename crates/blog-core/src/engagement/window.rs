//! Time-window view reporting

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::entities::DailyViewCounter;

/// Reporting window for the views chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewWindow {
    Today,
    ThreeDays,
    #[default]
    SevenDays,
}

impl ViewWindow {
    /// Parse the `views_range` query value; anything other than "1", "3" or "7"
    /// (including absence) means seven days
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("1") => Self::Today,
            Some("3") => Self::ThreeDays,
            _ => Self::SevenDays,
        }
    }

    pub fn from_days(days: i64) -> Self {
        match days {
            1 => Self::Today,
            3 => Self::ThreeDays,
            _ => Self::SevenDays,
        }
    }

    pub fn days(self) -> i64 {
        match self {
            Self::Today => 1,
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
        }
    }

    /// Query value that selects this window
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Today => "1",
            Self::ThreeDays => "3",
            Self::SevenDays => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThreeDays => "Last 3 days",
            Self::SevenDays => "Last 7 days",
        }
    }

    /// First day of the window ending at `today` inclusive
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days() - 1)
    }
}

/// One bar of the views chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyViews {
    pub date: NaiveDate,
    pub views: i64,
    /// Bar height relative to the busiest day in the window, 0-100
    pub height_pct: u32,
}

/// Per-day view series for a window, oldest day first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSeries {
    pub window: ViewWindow,
    pub days: Vec<DailyViews>,
    pub total: i64,
    pub max_views: i64,
}

impl ViewSeries {
    /// Build the series for the window ending at `today`.
    ///
    /// Days without a stored counter report zero views. Counters outside the
    /// window are ignored.
    pub fn build(window: ViewWindow, today: NaiveDate, counters: &[DailyViewCounter]) -> Self {
        let by_date: HashMap<NaiveDate, i64> =
            counters.iter().map(|c| (c.date, c.views)).collect();

        let start = window.start_date(today);
        let views: Vec<(NaiveDate, i64)> = (0..window.days())
            .map(|offset| {
                let date = start + Duration::days(offset);
                (date, by_date.get(&date).copied().unwrap_or(0).max(0))
            })
            .collect();

        let total = views.iter().map(|(_, v)| v).sum();
        let max_views = views.iter().map(|(_, v)| *v).max().unwrap_or(0);

        let days = views
            .into_iter()
            .map(|(date, views)| DailyViews {
                date,
                views,
                height_pct: height_pct(views, max_views),
            })
            .collect();

        Self {
            window,
            days,
            total,
            max_views,
        }
    }

    /// Empty series shown when engagement display is suppressed
    pub fn suppressed(window: ViewWindow) -> Self {
        Self {
            window,
            days: Vec::new(),
            total: 0,
            max_views: 0,
        }
    }
}

/// `round(views / max * 100)`, or 0 when the window has no views
fn height_pct(views: i64, max_views: i64) -> u32 {
    if max_views <= 0 {
        return 0;
    }
    // integer round-half-up
    ((views * 200 + max_views) / (2 * max_views)) as u32
}
