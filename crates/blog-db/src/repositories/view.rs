//! PostgreSQL implementations of the view ledger:
//! first-view records and lifetime/daily counters

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use blog_core::entities::DailyViewCounter;
use blog_core::error::DomainError;
use blog_core::traits::{FirstViewRepository, RepoResult, ViewCounterRepository};
use blog_core::value_objects::Snowflake;

use crate::models::DailyViewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FirstViewRepository
#[derive(Clone)]
pub struct PgFirstViewRepository {
    pool: PgPool,
}

impl PgFirstViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FirstViewRepository for PgFirstViewRepository {
    #[instrument(skip(self))]
    async fn claim_and_count(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Exactly one concurrent caller observes the inserted row
        let claimed = sqlx::query(
            r#"
            INSERT INTO post_first_views (post_id, user_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if claimed.rows_affected() == 0 {
            return Ok(false);
        }

        // The claim is only kept if the counters are written too
        increment_counters(&mut tx, post_id, date).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }
}

/// PostgreSQL implementation of ViewCounterRepository
#[derive(Clone)]
pub struct PgViewCounterRepository {
    pool: PgPool,
}

impl PgViewCounterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewCounterRepository for PgViewCounterRepository {
    #[instrument(skip(self))]
    async fn record_first_view(&self, post_id: Snowflake, date: NaiveDate) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        increment_counters(&mut tx, post_id, date).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_daily_counts(
        &self,
        post_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<DailyViewCounter>> {
        let results = sqlx::query_as::<_, DailyViewModel>(
            r#"
            SELECT post_id, view_date, views
            FROM post_daily_views
            WHERE post_id = $1 AND view_date BETWEEN $2 AND $3
            ORDER BY view_date
            "#,
        )
        .bind(post_id.into_inner())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DailyViewCounter::from).collect())
    }
}

/// Bump `visit_count` and the (post, date) counter inside `tx`.
/// Dropping the transaction on error rolls both back.
async fn increment_counters(
    tx: &mut Transaction<'_, Postgres>,
    post_id: Snowflake,
    date: NaiveDate,
) -> RepoResult<()> {
    let updated = sqlx::query(
        r#"
        UPDATE posts SET visit_count = visit_count + 1 WHERE id = $1
        "#,
    )
    .bind(post_id.into_inner())
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    if updated.rows_affected() == 0 {
        return Err(DomainError::PostNotFound(post_id));
    }

    sqlx::query(
        r#"
        INSERT INTO post_daily_views (post_id, view_date, views)
        VALUES ($1, $2, 1)
        ON CONFLICT (post_id, view_date)
        DO UPDATE SET views = post_daily_views.views + 1
        "#,
    )
    .bind(post_id.into_inner())
    .bind(date)
    .execute(&mut **tx)
    .await
    .map_err(map_db_error)?;

    Ok(())
}
