//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration, and the pools probed by the readiness check.

use std::sync::Arc;

use blog_cache::RedisPool;
use blog_common::{AppConfig, JwtService};
use blog_db::PgPool;
use blog_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    pool: PgPool,
    redis_pool: RedisPool,
}

impl AppState {
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        pool: PgPool,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool,
            redis_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("redis_pool", &self.redis_pool)
            .finish_non_exhaustive()
    }
}
