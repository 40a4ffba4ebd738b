//! Single-post view query extractor
//!
//! Combines `views_range`, `partial` and `X-Requested-With` into the
//! per-request flags the post flow consumes.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::ViewWindow;
use blog_service::dto::RequestFlags;
use serde::Deserialize;

use crate::middleware::REQUESTED_WITH_HEADER;
use crate::response::ApiError;

/// Raw query parameters of the single-post view
#[derive(Debug, Default, Deserialize)]
pub struct PostViewQuery {
    #[serde(default)]
    pub views_range: Option<String>,
    #[serde(default)]
    pub partial: Option<String>,
}

/// Parsed view window and request flags
#[derive(Debug, Clone, Copy)]
pub struct PostViewParams {
    pub window: ViewWindow,
    pub flags: RequestFlags,
}

impl PostViewParams {
    pub fn new(query: &PostViewQuery, xhr: bool) -> Self {
        Self {
            window: ViewWindow::parse(query.views_range.as_deref()),
            flags: RequestFlags::from_request(query.partial.as_deref(), xhr),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PostViewParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PostViewQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let xhr = parts
            .headers
            .get(REQUESTED_WITH_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"));

        Ok(Self::new(&query, xhr))
    }
}
