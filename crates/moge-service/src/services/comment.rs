//! Comment service
//!
//! Comments on a board form groups: one top-level comment opens a group and
//! replies attach to it. A group never has two top-level comments, and a reply
//! can only join a group that already exists.

use moge_core::{
    Comment, CommentKind, DomainError, EntityId, NewComment, ReactionSubject,
};
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, CreateCommentRequest, CreatedResponse, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_board(&self, board_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.board_repo().exists(board_id).await? {
            return Err(DomainError::SubjectNotFound {
                subject: ReactionSubject::Board,
                id: board_id,
            }
            .into());
        }
        Ok(())
    }

    /// Load a comment and check it lives on `board_id`
    async fn require_comment(
        &self,
        board_id: EntityId,
        comment_id: EntityId,
    ) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.board_id == board_id)
            .ok_or_else(|| DomainError::CommentNotFound(comment_id).into())
    }

    /// Comments of a board, each group's head followed by its replies
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn list(&self, board_id: EntityId) -> ServiceResult<Vec<CommentResponse>> {
        self.require_board(board_id).await?;
        let comments = self.ctx.comment_repo().find_by_board(board_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Create a top-level comment or a reply
    #[instrument(skip(self, request), fields(board_id = %board_id, author_id = %author_id, kind = request.kind.as_str()))]
    pub async fn create(
        &self,
        board_id: EntityId,
        author_id: EntityId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CreatedResponse> {
        self.require_board(board_id).await?;
        let repo = self.ctx.comment_repo();
        let content = request.content.trim();

        let (group_id, parent_id) = match (request.kind, request.group_id) {
            (CommentKind::Reply, None) => {
                return Err(ServiceError::validation("group_id is required for a reply"));
            }
            (CommentKind::Reply, Some(group_id)) => {
                // A hidden head keeps its replies but takes no new ones
                let head = repo
                    .find_group_head(board_id, group_id)
                    .await?
                    .filter(|head| !head.is_deleted())
                    .ok_or_else(|| {
                        warn!(group_id, "Reply to unknown group");
                        ServiceError::from(DomainError::GroupNotFound(group_id))
                    })?;
                (group_id, Some(head.id))
            }
            (CommentKind::TopLevel, Some(group_id)) => {
                if repo.find_group_head(board_id, group_id).await?.is_some() {
                    warn!(group_id, "Group already has a top-level comment");
                    return Err(DomainError::DuplicateGroupParent(group_id).into());
                }
                (group_id, None)
            }
            (CommentKind::TopLevel, None) => {
                let (id, group_id) = repo
                    .create_in_next_group(board_id, author_id, content)
                    .await?;
                info!(comment_id = %id, group_id, "Comment created");
                return Ok(CreatedResponse { id });
            }
        };

        let id = repo
            .create(&NewComment {
                board_id,
                author_id,
                content: content.to_string(),
                group_id,
                kind: request.kind,
                parent_id,
            })
            .await?;

        info!(comment_id = %id, group_id, "Comment created");
        Ok(CreatedResponse { id })
    }

    /// Replace the text of the caller's comment
    #[instrument(skip(self, request), fields(board_id = %board_id, comment_id = %comment_id))]
    pub async fn update(
        &self,
        board_id: EntityId,
        comment_id: EntityId,
        author_id: EntityId,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.require_comment(board_id, comment_id).await?;
        if !comment.is_authored_by(author_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        if !self
            .ctx
            .comment_repo()
            .update_content(comment_id, request.content.trim())
            .await?
        {
            return Err(DomainError::UpdateFailed("comment").into());
        }

        let updated = self.require_comment(board_id, comment_id).await?;
        info!("Comment updated");
        Ok(CommentResponse::from(&updated))
    }

    /// Delete the caller's comment
    ///
    /// A top-level comment that still has replies is only marked deleted so
    /// the thread stays readable; once its last reply goes, the head goes too.
    #[instrument(skip(self), fields(board_id = %board_id, comment_id = %comment_id))]
    pub async fn delete(
        &self,
        board_id: EntityId,
        comment_id: EntityId,
        author_id: EntityId,
    ) -> ServiceResult<()> {
        let comment = self.require_comment(board_id, comment_id).await?;
        if !comment.is_authored_by(author_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }
        let repo = self.ctx.comment_repo();

        match comment.parent_id {
            Some(head_id) => {
                repo.delete(comment_id).await?;
                info!("Reply deleted");

                if let Some(head) = repo.find_by_id(head_id).await? {
                    if head.is_deleted() && !repo.has_replies(head_id).await? {
                        repo.delete(head_id).await?;
                        info!(head_id = %head_id, "Emptied group removed");
                    }
                }
            }
            None if repo.has_replies(comment_id).await? => {
                repo.mark_deleted(comment_id).await?;
                info!("Top-level comment hidden, replies kept");
            }
            None => {
                repo.delete(comment_id).await?;
                info!("Top-level comment deleted");
            }
        }

        Ok(())
    }
}
