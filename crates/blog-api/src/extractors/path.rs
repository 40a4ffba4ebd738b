//! Path parameter extractors
//!
//! Snowflake IDs arrive as strings and are parsed by the handler.

use blog_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with post_id
#[derive(Debug, Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id as Snowflake
    pub fn post_id(&self) -> Result<Snowflake, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with tag_id
#[derive(Debug, Deserialize)]
pub struct TagIdPath {
    pub tag_id: String,
}

impl TagIdPath {
    /// Parse tag_id as Snowflake
    pub fn tag_id(&self) -> Result<Snowflake, ApiError> {
        self.tag_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid tag_id format"))
    }
}
