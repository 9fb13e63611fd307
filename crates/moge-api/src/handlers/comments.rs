//! Comment handlers

use axum::{extract::State, Json};
use moge_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreatedResponse, ReactionService,
    ToggleResponse, UpdateCommentRequest,
};

use crate::extractors::{AuthUser, BoardCommentPath, BoardIdPath, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comments of a board, grouped by thread
///
/// GET /boards/:board_id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(path): IdPath<BoardIdPath>,
) -> ApiResult<ApiJson<Vec<CommentResponse>>> {
    let comments = CommentService::new(state.service_context())
        .list(path.board_id()?)
        .await?;
    Ok(ApiJson(comments))
}

/// Post a top-level comment or a reply
///
/// POST /boards/:board_id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let response = CommentService::new(state.service_context())
        .create(path.board_id()?, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// PATCH /boards/:board_id/comments/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardCommentPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let response = CommentService::new(state.service_context())
        .update(path.board_id()?, path.comment_id()?, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /boards/:board_id/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardCommentPath>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete(path.board_id()?, path.comment_id()?, auth.user_id)
        .await?;
    Ok(NoContent)
}

/// Toggle the caller's like on a comment
///
/// POST /boards/:board_id/comments/:comment_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardCommentPath>,
) -> ApiResult<Json<ToggleResponse>> {
    let response = ReactionService::new(state.service_context())
        .toggle_comment_like(path.board_id()?, path.comment_id()?, auth.user_id)
        .await?;
    Ok(Json(response))
}
