//! Request handlers for API endpoints

pub mod catalog;
pub mod comments;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod subscriptions;
