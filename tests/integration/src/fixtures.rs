//! Test fixtures
//!
//! Seeds users, authors, categories and posts directly through the
//! PostgreSQL repositories, plus the response shapes the tests read.

use std::sync::OnceLock;

use anyhow::Result;
use blog_core::{
    Author, AuthorRepository, Category, CategoryRepository, Post, PostRepository, Snowflake,
    SnowflakeGenerator, User, UserRepository,
};
use blog_db::{
    PgAuthorRepository, PgCategoryRepository, PgPool, PgPostRepository, PgUserRepository,
};
use serde::Deserialize;

/// Unique Snowflake for seeded rows
pub fn next_id() -> Snowflake {
    static GENERATOR: OnceLock<SnowflakeGenerator> = OnceLock::new();
    GENERATOR.get_or_init(|| SnowflakeGenerator::new(901)).generate()
}

/// User without an author profile
pub async fn seed_reader(pool: &PgPool) -> Result<User> {
    let id = next_id();
    let user = User::new(
        id,
        format!("reader_{}", id.into_inner()),
        format!("reader_{}@example.com", id.into_inner()),
    );
    PgUserRepository::new(pool.clone()).create(&user).await?;
    Ok(user)
}

/// User with an author profile
pub async fn seed_author(pool: &PgPool) -> Result<(User, Author)> {
    let id = next_id();
    let user = User::new(
        id,
        format!("author_{}", id.into_inner()),
        format!("author_{}@example.com", id.into_inner()),
    );
    PgUserRepository::new(pool.clone()).create(&user).await?;

    let author = Author::new(next_id(), user.id, user.username.clone());
    PgAuthorRepository::new(pool.clone()).create(&author).await?;
    Ok((user, author))
}

pub async fn seed_category(pool: &PgPool) -> Result<Category> {
    let id = next_id();
    let category = Category::new(
        id,
        format!("Category {}", id.into_inner()),
        format!("category-{}", id.into_inner()),
    );
    PgCategoryRepository::new(pool.clone())
        .create(&category)
        .await?;
    Ok(category)
}

/// Post by `author`; published posts are active and visible
pub async fn seed_post(
    pool: &PgPool,
    author: &Author,
    category: Option<&Category>,
    published: bool,
) -> Result<Post> {
    let id = next_id();
    let mut post = Post::new(
        id,
        author.id,
        format!("Post {}", id.into_inner()),
        format!("Body of post {}", id.into_inner()),
    );
    post.category_id = category.map(|c| c.id);
    if published {
        post.publish();
    }
    PgPostRepository::new(pool.clone()).create(&post).await?;
    Ok(post)
}

/// Current stored visit count
pub async fn visit_count(pool: &PgPool, post_id: Snowflake) -> Result<i64> {
    let post = PgPostRepository::new(pool.clone())
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("post {post_id} missing"))?;
    Ok(post.visit_count)
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DailyViews {
    pub date: String,
    pub views: i64,
    pub height_pct: i64,
}

#[derive(Debug, Deserialize)]
pub struct ViewChart {
    pub views_range: String,
    pub views_range_label: String,
    pub show_views_likes: bool,
    pub series: Vec<DailyViews>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub visit_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct PostPage {
    pub post: PostSummary,
    pub likes_count: i64,
    pub can_like: bool,
    pub user_has_liked: bool,
    pub user_reaction: Option<String>,
    pub related: Vec<PostSummary>,
    pub views: ViewChart,
}

#[derive(Debug, Deserialize)]
pub struct ReactionToggle {
    pub liked: bool,
    pub reaction: Option<String>,
    pub likes_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct Subscription {
    pub subscribed: bool,
    pub already_subscribed: bool,
}

#[derive(Debug, Deserialize)]
pub struct AuthorProfile {
    pub posts: Vec<PostSummary>,
    pub total_views: i64,
}
