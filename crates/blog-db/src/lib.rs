//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and startup migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! Every get-or-create path (first views, daily counters, reactions,
//! subscriptions) is resolved inside PostgreSQL with `ON CONFLICT` or a
//! transaction, never by a read followed by a separate write.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, DatabaseConfig, PgPostRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let posts = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAuthorRepository, PgCategoryRepository, PgCommentRepository, PgFirstViewRepository,
    PgPostRepository, PgReactionRepository, PgSubscriptionRepository, PgTagRepository,
    PgUserRepository, PgViewCounterRepository,
};
