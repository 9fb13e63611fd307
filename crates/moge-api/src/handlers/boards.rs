//! Board, quiz, and board like handlers

use axum::{extract::State, Json};
use moge_core::ReactionSubject;
use moge_service::{
    BoardResponse, BoardService, BoardSummaryResponse, CreateBoardRequest, CreateQuizRequest,
    CreatedResponse, QuizResponse, ReactionService, ReactionStateResponse, ToggleResponse,
};

use crate::extractors::{AuthUser, BoardIdPath, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// POST /boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBoardRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let response = BoardService::new(state.service_context())
        .create_board(auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Board detail; counts as a view
///
/// GET /boards/:board_id
pub async fn get_board(
    State(state): State<AppState>,
    IdPath(path): IdPath<BoardIdPath>,
) -> ApiResult<Json<BoardResponse>> {
    let board = BoardService::new(state.service_context())
        .get_board(path.board_id()?)
        .await?;
    Ok(Json(board))
}

/// GET /boards/top/like
pub async fn top_by_likes(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<BoardSummaryResponse>>> {
    let boards = BoardService::new(state.service_context())
        .top_by_likes()
        .await?;
    Ok(ApiJson(boards))
}

/// GET /boards/top/view
pub async fn top_by_views(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<Vec<BoardSummaryResponse>>> {
    let boards = BoardService::new(state.service_context())
        .top_by_views()
        .await?;
    Ok(ApiJson(boards))
}

/// POST /boards/:board_id/quizzes
pub async fn create_quiz(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardIdPath>,
    ValidatedJson(request): ValidatedJson<CreateQuizRequest>,
) -> ApiResult<Created<Json<CreatedResponse>>> {
    let response = BoardService::new(state.service_context())
        .create_quiz(path.board_id()?, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /boards/:board_id/quizzes
pub async fn list_quizzes(
    State(state): State<AppState>,
    IdPath(path): IdPath<BoardIdPath>,
) -> ApiResult<ApiJson<Vec<QuizResponse>>> {
    let quizzes = BoardService::new(state.service_context())
        .quizzes(path.board_id()?)
        .await?;
    Ok(ApiJson(quizzes))
}

/// Toggle the caller's like on a board
///
/// POST /boards/:board_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardIdPath>,
) -> ApiResult<Json<ToggleResponse>> {
    let response = ReactionService::new(state.service_context())
        .toggle_board_like(path.board_id()?, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Whether the caller likes the board, with its like count
///
/// GET /boards/:board_id/like
pub async fn like_state(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<BoardIdPath>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let response = ReactionService::new(state.service_context())
        .reaction_state(ReactionSubject::Board, path.board_id()?, auth.user_id)
        .await?;
    Ok(Json(response))
}
