//! PostgreSQL implementation of SubscriptionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::traits::{RepoResult, SubscriptionRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of SubscriptionRepository
#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[instrument(skip(self))]
    async fn subscribe(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO email_signups (email, created_at)
            VALUES ($1, NOW())
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
