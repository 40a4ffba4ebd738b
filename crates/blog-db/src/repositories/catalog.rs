//! PostgreSQL implementations of CategoryRepository and TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Category, CategoryPostCount, Tag};
use blog_core::error::DomainError;
use blog_core::traits::{CategoryRepository, RepoResult, TagRepository};
use blog_core::value_objects::Snowflake;

use crate::models::{CategoryModel, CategoryPostCountModel, TagModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT id, name, slug FROM categories WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn find_top(&self, limit: i64) -> RepoResult<Vec<CategoryPostCount>> {
        let results = sqlx::query_as::<_, CategoryPostCountModel>(
            r#"
            SELECT c.id, c.name, c.slug, COUNT(p.id) AS post_count
            FROM categories c
            INNER JOIN posts p ON p.category_id = c.id
            GROUP BY c.id, c.name, c.slug
            ORDER BY post_count DESC, c.name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CategoryPostCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("slug {} is taken", category.slug))
            })
        })?;

        Ok(())
    }
}

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r#"
            SELECT id, name FROM tags WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tags (id, name) VALUES ($1, $2)
            "#,
        )
        .bind(tag.id.into_inner())
        .bind(&tag.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn attach(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, tag_id) DO NOTHING
            "#,
        )
        .bind(post_id.into_inner())
        .bind(tag_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
