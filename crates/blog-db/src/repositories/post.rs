//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Post;
use blog_core::traits::{PostRepository, RepoResult};
use blog_core::value_objects::Snowflake;
use blog_core::DomainError;

use crate::models::PostModel;

use super::error::{escape_like, map_db_error, map_unique_violation};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, category_id, title, detail, status, visible,
                               featured, visit_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(post.id.into_inner())
        .bind(post.author_id.into_inner())
        .bind(post.category_id.map(Snowflake::into_inner))
        .bind(&post.title)
        .bind(&post.detail)
        .bind(post.status.as_str())
        .bind(post.visible)
        .bind(post.featured)
        .bind(post.visit_count)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("post {} already exists", post.id))
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_published(
        &self,
        limit: i64,
        before: Option<Snowflake>,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE status = 'active' AND visible
              AND ($1::BIGINT IS NULL OR id < $1)
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(before.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE status = 'active' AND visible AND featured
            ORDER BY category_id NULLS LAST, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_related(
        &self,
        author_id: Snowflake,
        exclude_post_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE author_id = $1 AND id <> $2 AND status = 'active' AND visible
            ORDER BY id DESC
            LIMIT $3
            "#,
        )
        .bind(author_id.into_inner())
        .bind(exclude_post_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_published_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
        before: Option<Snowflake>,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE category_id = $1 AND status = 'active' AND visible
              AND ($2::BIGINT IS NULL OR id < $2)
            ORDER BY id DESC
            LIMIT $3
            "#,
        )
        .bind(category_id.into_inner())
        .bind(before.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_popular_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE category_id = $1 AND status = 'active' AND visible
            ORDER BY visit_count DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(category_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_published_by_tag(&self, tag_id: Snowflake) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT p.id, p.author_id, p.category_id, p.title, p.detail, p.status, p.visible,
                   p.featured, p.visit_count, p.created_at, p.updated_at
            FROM posts p
            INNER JOIN post_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = $1 AND p.status = 'active' AND p.visible
            ORDER BY p.id DESC
            "#,
        )
        .bind(tag_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_published_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, category_id, title, detail, status, visible, featured,
                   visit_count, created_at, updated_at
            FROM posts
            WHERE author_id = $1 AND status = 'active' AND visible
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_published(&self, query: &str, limit: i64) -> RepoResult<Vec<Post>> {
        let pattern = format!("%{}%", escape_like(query));

        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT p.id, p.author_id, p.category_id, p.title, p.detail, p.status, p.visible,
                   p.featured, p.visit_count, p.created_at, p.updated_at
            FROM posts p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.status = 'active' AND p.visible
              AND (p.title ILIKE $1 ESCAPE '\'
                   OR c.name ILIKE $1 ESCAPE '\'
                   OR p.detail ILIKE $1 ESCAPE '\')
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn total_visits_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(visit_count), 0)::BIGINT
            FROM posts
            WHERE author_id = $1 AND status = 'active' AND visible
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(total)
    }
}
