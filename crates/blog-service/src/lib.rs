//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] that holds the repository ports, so
//! the same flows run against PostgreSQL/Redis in production and against
//! in-memory stores in tests.

pub mod dto;
pub mod services;

pub use services::{
    CatalogService, CommentService, PostService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SubscriptionService, ViewAggregator,
    ViewLedger, ViewReportService, ViewerService,
};
