//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod catalog;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod reaction;
pub mod subscription;
pub mod view_aggregator;
pub mod view_ledger;
pub mod view_report;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use catalog::CatalogService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use reaction::ReactionService;
pub use subscription::SubscriptionService;
pub use view_aggregator::ViewAggregator;
pub use view_ledger::ViewLedger;
pub use view_report::ViewReportService;
pub use viewer::ViewerService;
