//! Integration test utilities for the blog server
//!
//! Spawns the real REST API against PostgreSQL and Redis and seeds data
//! through the repositories.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
