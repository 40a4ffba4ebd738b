//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.

mod account;
mod catalog;
mod comment;
mod error;
mod post;
mod reaction;
mod subscription;
mod view;

pub use account::{PgAuthorRepository, PgUserRepository};
pub use catalog::{PgCategoryRepository, PgTagRepository};
pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use subscription::PgSubscriptionRepository;
pub use view::{PgFirstViewRepository, PgViewCounterRepository};
