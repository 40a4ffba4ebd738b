//! User and author database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Author row joined with the owning user's username
#[derive(Debug, Clone, FromRow)]
pub struct AuthorModel {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}
