//! # blog-core
//!
//! Domain layer for the blog platform: entities, value objects, the engagement rules
//! (visibility, view windows, reaction toggling) and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod engagement;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use engagement::{
    can_view, should_count_view, should_display_engagement, DailyViews, ReactionChange,
    ReactionState, ViewSeries, ViewWindow,
};
pub use entities::{
    Author, Category, CategoryPostCount, Comment, DailyViewCounter, EmailSignup, Post,
    PostStatus, Reaction, ReactionKind, Tag, User,
};
pub use error::DomainError;
pub use traits::{
    AuthorRepository, CategoryRepository, CommentRepository, FirstViewRepository, PostRepository,
    ReactionRepository, RepoResult, SessionViewStore, SubscriptionRepository, TagRepository,
    UserRepository, ViewCounterRepository,
};
pub use value_objects::{
    Snowflake, SnowflakeGenerator, SnowflakeParseError, UserRole, Viewer, ViewerIdentity,
};
