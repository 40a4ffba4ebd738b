//! Per-session "seen post ids" set in Redis.
//!
//! Each anonymous session owns one set. The set's TTL is pushed back to the
//! session lifetime on every insert, so an idle session's set disappears
//! together with its cookie.

use async_trait::async_trait;
use blog_core::traits::{RepoResult, SessionViewStore};
use blog_core::Snowflake;
use tracing::instrument;

use redis::AsyncCommands;

use crate::pool::{map_cache_error, RedisPool, RedisResult};

/// Key prefix for session view sets
const SESSION_VIEWS_PREFIX: &str = "session_views:";

/// Default TTL matching the session cookie lifetime (2 weeks)
const DEFAULT_SESSION_TTL: u64 = 14 * 24 * 60 * 60;

/// Redis-backed [`SessionViewStore`]
#[derive(Clone, Debug)]
pub struct RedisSessionViewStore {
    pool: RedisPool,
    ttl_seconds: i64,
}

impl RedisSessionViewStore {
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        // EXPIRE takes a signed value; anything larger is effectively forever
        let ttl_seconds = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        Self { pool, ttl_seconds }
    }

    #[must_use]
    pub fn with_default_ttl(pool: RedisPool) -> Self {
        Self::new(pool, DEFAULT_SESSION_TTL)
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_VIEWS_PREFIX}{session_id}")
    }

    async fn add_and_refresh(&self, session_id: &str, post_id: Snowflake) -> RedisResult<bool> {
        let key = Self::key(session_id);
        let mut conn = self.pool.get().await?;
        let (added, _): (i64, i64) = redis::pipe()
            .atomic()
            .sadd(&key, post_id.into_inner())
            .expire(&key, self.ttl_seconds)
            .query_async(&mut conn)
            .await?;

        Ok(added == 1)
    }

    async fn remove(&self, session_id: &str, post_id: Snowflake) -> RedisResult<()> {
        let mut conn = self.pool.get().await?;
        let _: i64 = conn.srem(Self::key(session_id), post_id.into_inner()).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionViewStore for RedisSessionViewStore {
    #[instrument(skip(self, session_id))]
    async fn mark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<bool> {
        let first_time = self
            .add_and_refresh(session_id, post_id)
            .await
            .map_err(map_cache_error)?;

        tracing::debug!(post_id = %post_id, first_time, "Session view recorded");
        Ok(first_time)
    }

    #[instrument(skip(self, session_id))]
    async fn unmark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<()> {
        self.remove(session_id, post_id)
            .await
            .map_err(map_cache_error)
    }
}
