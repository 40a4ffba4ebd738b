//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(comment_id = %comment.id, post_id = %comment.post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, user_id, name, body, is_approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.name)
        .bind(&comment.body)
        .bind(comment.is_approved)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_approved_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, post_id, user_id, name, body, is_approved, created_at
            FROM comments
            WHERE post_id = $1 AND is_approved
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
