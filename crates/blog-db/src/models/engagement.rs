//! Engagement database models - daily views, reactions, comments

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for post_daily_views table
#[derive(Debug, Clone, FromRow)]
pub struct DailyViewModel {
    pub post_id: i64,
    pub view_date: NaiveDate,
    pub views: i64,
}

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub post_id: i64,
    pub author_id: i64,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub name: String,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
