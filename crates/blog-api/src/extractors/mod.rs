//! Axum extractors for request handling
//!
//! Custom extractors for authentication, the anonymous session cookie,
//! validation, and pagination.

mod auth;
mod pagination;
mod path;
mod session;
mod validated;
mod view_query;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::{Pagination, PaginationParams};
pub use path::{PostIdPath, TagIdPath};
pub use session::{AnonymousSession, SESSION_COOKIE};
pub use validated::{OptionalValidatedJson, ValidatedJson};
pub use view_query::{PostViewParams, PostViewQuery};
