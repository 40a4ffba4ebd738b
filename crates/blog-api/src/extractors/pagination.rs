//! Pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Get items older than this post ID
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
///
/// The page size is left to the handler's default when absent; services
/// clamp it to their maximum.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub before: Option<Snowflake>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default)
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let before = params
            .before
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'before' cursor format"))
            })
            .transpose()?;

        Ok(Pagination {
            before,
            limit: params.limit,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
