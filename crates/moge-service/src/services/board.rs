//! Board service
//!
//! Quiz boards, their rankings, and the quizzes attached to them.

use moge_core::{DomainError, EntityId, NewBoard, NewQuiz, ReactionSubject};
use tracing::{info, instrument};

use crate::dto::{
    BoardResponse, BoardSummaryResponse, BoardWithLikes, CreateBoardRequest, CreateQuizRequest,
    CreatedResponse, QuizResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Board service
pub struct BoardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BoardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a board in an existing category
    #[instrument(skip(self, request), fields(author_id = %author_id, category_id = %request.category_id))]
    pub async fn create_board(
        &self,
        author_id: EntityId,
        request: CreateBoardRequest,
    ) -> ServiceResult<CreatedResponse> {
        if !self
            .ctx
            .board_repo()
            .category_exists(request.category_id)
            .await?
        {
            return Err(DomainError::ValidationError(format!(
                "unknown category {}",
                request.category_id
            ))
            .into());
        }

        let id = self
            .ctx
            .board_repo()
            .create(&NewBoard {
                author_id,
                category_id: request.category_id,
                title: request.title.trim().to_string(),
            })
            .await?;

        info!(board_id = %id, "Board created");
        Ok(CreatedResponse { id })
    }

    /// Board detail; every read counts as a view
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn get_board(&self, board_id: EntityId) -> ServiceResult<BoardResponse> {
        if !self.ctx.board_repo().increment_view_count(board_id).await? {
            return Err(DomainError::BoardNotFound(board_id).into());
        }

        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;
        let like_count = self
            .ctx
            .reaction_repo()
            .count_active(ReactionSubject::Board, board_id)
            .await?;

        Ok(BoardWithLikes { board, like_count }.into())
    }

    /// Most liked boards
    #[instrument(skip(self))]
    pub async fn top_by_likes(&self) -> ServiceResult<Vec<BoardSummaryResponse>> {
        let limit = self.ctx.settings().top_board_limit;
        let boards = self.ctx.board_repo().top_by_likes(limit).await?;
        Ok(boards.iter().map(BoardSummaryResponse::from).collect())
    }

    /// Most viewed boards
    #[instrument(skip(self))]
    pub async fn top_by_views(&self) -> ServiceResult<Vec<BoardSummaryResponse>> {
        let limit = self.ctx.settings().top_board_limit;
        let boards = self.ctx.board_repo().top_by_views(limit).await?;
        Ok(boards.iter().map(BoardSummaryResponse::from).collect())
    }

    /// Add a quiz to a board written by the caller
    #[instrument(skip(self, request), fields(board_id = %board_id, author_id = %author_id))]
    pub async fn create_quiz(
        &self,
        board_id: EntityId,
        author_id: EntityId,
        request: CreateQuizRequest,
    ) -> ServiceResult<CreatedResponse> {
        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        if !board.is_authored_by(author_id) {
            return Err(DomainError::NotBoardAuthor.into());
        }

        let id = self
            .ctx
            .quiz_repo()
            .create(&NewQuiz {
                board_id,
                question: request.question.trim().to_string(),
                quiz_type: request.quiz_type,
            })
            .await?;

        info!(quiz_id = %id, quiz_type = request.quiz_type.as_str(), "Quiz created");
        Ok(CreatedResponse { id })
    }

    /// Quizzes of a board in creation order
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn quizzes(&self, board_id: EntityId) -> ServiceResult<Vec<QuizResponse>> {
        if !self.ctx.board_repo().exists(board_id).await? {
            return Err(DomainError::BoardNotFound(board_id).into());
        }
        let quizzes = self.ctx.quiz_repo().find_by_board(board_id).await?;
        Ok(quizzes.iter().map(QuizResponse::from).collect())
    }
}
