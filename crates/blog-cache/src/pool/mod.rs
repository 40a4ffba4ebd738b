//! Redis connection pool module.
//!
//! Provides connection pooling for Redis using deadpool-redis.

mod redis_pool;

pub use redis_pool::{map_cache_error, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
