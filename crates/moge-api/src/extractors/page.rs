//! Page query extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use moge_service::PageQuery;

use crate::response::ApiError;

/// 1-based page number from `?page=`, defaulting to the first page
#[derive(Debug, Clone, Copy)]
pub struct Page(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Page(query.page))
    }
}
