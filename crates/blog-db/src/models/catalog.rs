//! Category and tag database models

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Category with its post count (from aggregate query)
#[derive(Debug, Clone, FromRow)]
pub struct CategoryPostCountModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub post_count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
}
