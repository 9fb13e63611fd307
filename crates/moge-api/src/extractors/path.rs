//! Path parameter extractors
//!
//! Ids in paths are parsed into `EntityId`; anything that is not a positive
//! integer is rejected before a handler runs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use moge_core::EntityId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Deserialize path parameters into `T`, mapping rejections to `ApiError`
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

fn parse_id(raw: &str, name: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|e| ApiError::invalid_path(format!("{name}: {e}")))
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    pub fn user_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.user_id, "user_id")
    }
}

/// Path parameters with board_id
#[derive(Debug, Deserialize)]
pub struct BoardIdPath {
    pub board_id: String,
}

impl BoardIdPath {
    pub fn board_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.board_id, "board_id")
    }
}

/// Path parameters with board_id and comment_id
#[derive(Debug, Deserialize)]
pub struct BoardCommentPath {
    pub board_id: String,
    pub comment_id: String,
}

impl BoardCommentPath {
    pub fn board_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.board_id, "board_id")
    }

    pub fn comment_id(&self) -> Result<EntityId, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }
}
