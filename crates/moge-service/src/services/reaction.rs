//! Reaction service
//!
//! Likes on boards and comments. Each call flips the caller's like: a first
//! like is added, an active one removed, a removed one reactivated. Calls are
//! not idempotent, so a retried request toggles again.

use moge_core::{DomainError, EntityId, ReactionKey, ReactionSubject};
use tracing::{info, instrument};

use crate::dto::{ReactionStateResponse, ToggleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_subject(
        &self,
        subject: ReactionSubject,
        subject_id: EntityId,
    ) -> ServiceResult<()> {
        let exists = match subject {
            ReactionSubject::Board => self.ctx.board_repo().exists(subject_id).await?,
            ReactionSubject::Comment => self
                .ctx
                .comment_repo()
                .find_by_id(subject_id)
                .await?
                .is_some_and(|c| !c.is_deleted()),
        };
        if !exists {
            return Err(DomainError::SubjectNotFound {
                subject,
                id: subject_id,
            }
            .into());
        }
        Ok(())
    }

    /// Toggle the caller's like on a board
    #[instrument(skip(self), fields(board_id = %board_id, user_id = %user_id))]
    pub async fn toggle_board_like(
        &self,
        board_id: EntityId,
        user_id: EntityId,
    ) -> ServiceResult<ToggleResponse> {
        let action = self
            .ctx
            .reaction_repo()
            .toggle(ReactionKey::board(board_id, user_id))
            .await?;

        info!(action = %action, "Board like toggled");
        Ok(ToggleResponse::new(board_id, user_id, action))
    }

    /// Toggle the caller's like on a comment of `board_id`
    #[instrument(skip(self), fields(board_id = %board_id, comment_id = %comment_id, user_id = %user_id))]
    pub async fn toggle_comment_like(
        &self,
        board_id: EntityId,
        comment_id: EntityId,
        user_id: EntityId,
    ) -> ServiceResult<ToggleResponse> {
        if !self.ctx.board_repo().exists(board_id).await? {
            return Err(DomainError::SubjectNotFound {
                subject: ReactionSubject::Board,
                id: board_id,
            }
            .into());
        }

        let on_board = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .is_some_and(|c| c.board_id == board_id);
        if !on_board {
            return Err(DomainError::SubjectNotFound {
                subject: ReactionSubject::Comment,
                id: comment_id,
            }
            .into());
        }

        let action = self
            .ctx
            .reaction_repo()
            .toggle(ReactionKey::comment(comment_id, user_id))
            .await?;

        info!(action = %action, "Comment like toggled");
        Ok(ToggleResponse::new(comment_id, user_id, action))
    }

    /// Whether the user currently likes the subject, with the subject's total
    #[instrument(skip(self), fields(subject = %subject, subject_id = %subject_id, user_id = %user_id))]
    pub async fn reaction_state(
        &self,
        subject: ReactionSubject,
        subject_id: EntityId,
        user_id: EntityId,
    ) -> ServiceResult<ReactionStateResponse> {
        self.require_subject(subject, subject_id).await?;
        let key = ReactionKey::new(subject, subject_id, user_id);
        let active = self
            .ctx
            .reaction_repo()
            .find(key)
            .await?
            .is_some_and(|r| r.state().is_active());
        let like_count = self.like_count(subject, subject_id).await?;

        Ok(ReactionStateResponse {
            subject,
            subject_id,
            user_id,
            active,
            like_count,
        })
    }

    /// Number of active likes on a subject
    pub async fn like_count(
        &self,
        subject: ReactionSubject,
        subject_id: EntityId,
    ) -> ServiceResult<i64> {
        Ok(self
            .ctx
            .reaction_repo()
            .count_active(subject, subject_id)
            .await?)
    }
}
