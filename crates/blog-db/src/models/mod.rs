//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod catalog;
mod engagement;
mod post;

pub use account::{AuthorModel, UserModel};
pub use catalog::{CategoryModel, CategoryPostCountModel, TagModel};
pub use engagement::{CommentModel, DailyViewModel, ReactionModel};
pub use post::PostModel;
