//! # blog-cache
//!
//! Redis layer for anonymous reader sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session View Store**: the set of posts an anonymous session has
//!   already viewed, expiring together with the session
//!
//! ## Example
//!
//! ```ignore
//! use blog_cache::{RedisPool, RedisPoolConfig, RedisSessionViewStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let store = RedisSessionViewStore::new(pool, 14 * 24 * 60 * 60);
//! let first_time = store.mark_seen("session-id", post_id).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{map_cache_error, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::RedisSessionViewStore;
