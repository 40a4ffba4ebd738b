//! PostgreSQL implementations of UserRepository and AuthorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Author, User};
use blog_core::error::DomainError;
use blog_core::traits::{AuthorRepository, RepoResult, UserRepository};
use blog_core::value_objects::Snowflake;

use crate::models::{AuthorModel, UserModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, username, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!("username {} is taken", user.username))
            })
        })?;

        Ok(())
    }
}

/// PostgreSQL implementation of AuthorRepository
#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Author>> {
        let result = sqlx::query_as::<_, AuthorModel>(
            r#"
            SELECT a.id, a.user_id, u.username, a.bio, a.created_at
            FROM authors a
            INNER JOIN users u ON u.id = a.user_id
            WHERE a.user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Author::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Author>> {
        let result = sqlx::query_as::<_, AuthorModel>(
            r#"
            SELECT a.id, a.user_id, u.username, a.bio, a.created_at
            FROM authors a
            INNER JOIN users u ON u.id = a.user_id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Author::from))
    }

    #[instrument(skip(self, author), fields(author_id = %author.id))]
    async fn create(&self, author: &Author) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, user_id, bio, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(author.id.into_inner())
        .bind(author.user_id.into_inner())
        .bind(&author.bio)
        .bind(author.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("user already has an author profile".to_string())
            })
        })?;

        Ok(())
    }
}
