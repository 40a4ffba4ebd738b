//! Engagement rules - pure decisions about visibility, view counting,
//! view-window reporting and reaction toggling
//!
//! Nothing in here touches storage; services feed these functions the
//! entities they loaded and persist whatever they decide.

mod reaction;
mod visibility;
mod window;

pub use reaction::{ReactionChange, ReactionState};
pub use visibility::{can_view, should_count_view, should_display_engagement};
pub use window::{DailyViews, ViewSeries, ViewWindow};
