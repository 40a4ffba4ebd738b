//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::engagement::ReactionChange;
use blog_core::entities::{Reaction, ReactionKind};
use blog_core::traits::{ReactionRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT post_id, author_id, reaction, created_at
            FROM reactions
            WHERE post_id = $1 AND author_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        requested: &ReactionKind,
    ) -> RepoResult<ReactionChange> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO reactions (post_id, author_id, reaction, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (post_id, author_id) DO NOTHING
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .bind(requested.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if inserted.rows_affected() == 1 {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(ReactionChange::Create(requested.clone()));
        }

        // Row exists: lock it so concurrent toggles by the same author serialize
        let existing = sqlx::query_scalar::<_, String>(
            r#"
            SELECT reaction FROM reactions
            WHERE post_id = $1 AND author_id = $2
            FOR UPDATE
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(|tag| ReactionKind::from_tag(&tag));

        let change = ReactionChange::decide(existing.as_ref(), requested);

        match &change {
            ReactionChange::Create(kind) => {
                // deleted between our insert attempt and the lock
                sqlx::query(
                    r#"
                    INSERT INTO reactions (post_id, author_id, reaction, created_at)
                    VALUES ($1, $2, $3, NOW())
                    ON CONFLICT (post_id, author_id)
                    DO UPDATE SET reaction = EXCLUDED.reaction, updated_at = NOW()
                    "#,
                )
                .bind(post_id.into_inner())
                .bind(author_id.into_inner())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionChange::Replace(kind) => {
                sqlx::query(
                    r#"
                    UPDATE reactions SET reaction = $3, updated_at = NOW()
                    WHERE post_id = $1 AND author_id = $2
                    "#,
                )
                .bind(post_id.into_inner())
                .bind(author_id.into_inner())
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            ReactionChange::Remove => {
                sqlx::query(
                    r#"
                    DELETE FROM reactions WHERE post_id = $1 AND author_id = $2
                    "#,
                )
                .bind(post_id.into_inner())
                .bind(author_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(change)
    }

    #[instrument(skip(self))]
    async fn count_likes(&self, post_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE post_id = $1 AND reaction <> 'dislike'
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
