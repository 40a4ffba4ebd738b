//! Value objects - immutable domain primitives

mod snowflake;
mod viewer;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use viewer::{UserRole, Viewer, ViewerIdentity};
