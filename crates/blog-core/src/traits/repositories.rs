//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `blog-db` (PostgreSQL) and
//! `blog-cache` (Redis) provide the implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::engagement::ReactionChange;
use crate::entities::{
    Author, Category, CategoryPostCount, Comment, DailyViewCounter, Post, Reaction, ReactionKind,
    Tag, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Every `find_published*` query only returns active and visible posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID regardless of status
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Published posts, newest first, optionally before a cursor id
    async fn find_published(&self, limit: i64, before: Option<Snowflake>)
        -> RepoResult<Vec<Post>>;

    /// Published featured posts ordered by category, then newest first
    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Post>>;

    /// Other published posts by the same author, newest first
    async fn find_related(
        &self,
        author_id: Snowflake,
        exclude_post_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>>;

    /// Published posts in a category, newest first
    async fn find_published_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
        before: Option<Snowflake>,
    ) -> RepoResult<Vec<Post>>;

    /// Published posts in a category, most viewed first
    async fn find_popular_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>>;

    /// Published posts carrying a tag, newest first
    async fn find_published_by_tag(&self, tag_id: Snowflake) -> RepoResult<Vec<Post>>;

    /// Published posts by an author, newest first
    async fn find_published_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Post>>;

    /// Case-insensitive substring search over title, category name and body
    async fn search_published(&self, query: &str, limit: i64) -> RepoResult<Vec<Post>>;

    /// Sum of `visit_count` over an author's published posts
    async fn total_visits_by_author(&self, author_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// User / Author Repositories
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find the author profile owned by a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Author>>;

    /// Find author by the owning user's username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Author>>;

    /// Create an author profile
    async fn create(&self, author: &Author) -> RepoResult<()>;
}

// ============================================================================
// Category / Tag Repositories
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// Categories with at least one post, most posts first
    async fn find_top(&self, limit: i64) -> RepoResult<Vec<CategoryPostCount>>;

    async fn create(&self, category: &Category) -> RepoResult<()>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tag>>;

    async fn create(&self, tag: &Tag) -> RepoResult<()>;

    /// Attach a tag to a post (no-op if already attached)
    async fn attach(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// View Ledger
// ============================================================================

/// Durable first-view records for signed-in users
#[async_trait]
pub trait FirstViewRepository: Send + Sync {
    /// Create the (post, user) record and, when this call created it, bump
    /// the lifetime and daily counters in the same unit of work.
    /// Returns `true` only when the view was counted.
    async fn claim_and_count(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<bool>;
}

/// Session-scoped "seen post ids" for anonymous viewers
#[async_trait]
pub trait SessionViewStore: Send + Sync {
    /// Add the post to the session's seen set.
    /// Returns `true` when it was not already present.
    async fn mark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<bool>;

    /// Remove the post from the session's seen set
    async fn unmark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<()>;
}

#[async_trait]
pub trait ViewCounterRepository: Send + Sync {
    /// Increment the post's lifetime `visit_count` and the (post, date) daily
    /// counter as one unit of work
    async fn record_first_view(&self, post_id: Snowflake, date: NaiveDate) -> RepoResult<()>;

    /// Stored daily counters for a post in the inclusive date range
    async fn find_daily_counts(
        &self,
        post_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<DailyViewCounter>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction an author left on a post
    async fn find(&self, post_id: Snowflake, author_id: Snowflake)
        -> RepoResult<Option<Reaction>>;

    /// Create, replace or remove the (post, author) reaction atomically,
    /// returning the change that was applied
    async fn toggle(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        requested: &ReactionKind,
    ) -> RepoResult<ReactionChange>;

    /// Count reactions on a post, excluding dislikes
    async fn count_likes(&self, post_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Comment / Subscription Repositories
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Approved comments on a post, oldest first
    async fn find_approved_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Store the address. Returns `false` when it was already subscribed.
    async fn subscribe(&self, email: &str) -> RepoResult<bool>;
}
