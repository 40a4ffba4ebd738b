//! Domain entities - core business objects

mod author;
mod category;
mod comment;
mod post;
mod reaction;
mod subscription;
mod user;
mod view;

pub use author::Author;
pub use category::{Category, CategoryPostCount, Tag};
pub use comment::{Comment, MAX_COMMENT_LENGTH};
pub use post::{Post, PostStatus};
pub use reaction::{Reaction, ReactionKind};
pub use subscription::EmailSignup;
pub use user::User;
pub use view::DailyViewCounter;
