//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use blog_cache::{RedisPool, RedisSessionViewStore};
use blog_common::{AppConfig, AppError, JwtService};
use blog_core::SnowflakeGenerator;
use blog_db::{
    create_pool, run_migrations, PgAuthorRepository, PgCategoryRepository, PgCommentRepository,
    PgFirstViewRepository, PgPostRepository, PgReactionRepository, PgSubscriptionRepository,
    PgTagRepository, PgUserRepository, PgViewCounterRepository,
};
use blog_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_base_middleware, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_base_middleware(health_routes());

    health.merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&blog_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, &config.database.migrations_dir)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    if let Err(e) = redis_pool.health_check().await {
        // Connections are opened lazily
        warn!(error = %e, "Redis is not reachable yet");
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));
    let session_views = Arc::new(RedisSessionViewStore::new(
        redis_pool.clone(),
        config.session.ttl_seconds,
    ));

    let service_context = ServiceContextBuilder::new()
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .author_repo(Arc::new(PgAuthorRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .tag_repo(Arc::new(PgTagRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .subscription_repo(Arc::new(PgSubscriptionRepository::new(pool.clone())))
        .first_view_repo(Arc::new(PgFirstViewRepository::new(pool.clone())))
        .view_counter_repo(Arc::new(PgViewCounterRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .session_view_store(session_views)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Serve `app` on an already bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}
