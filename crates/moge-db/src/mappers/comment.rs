//! Comment entity <-> model mapper

use moge_core::entities::{Comment, CommentStatus, NewComment};
use moge_core::value_objects::{CommentKind, EntityId};
use tracing::warn;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        let kind = CommentKind::parse(&model.kind).unwrap_or(if model.parent_id.is_some() {
            CommentKind::Reply
        } else {
            CommentKind::TopLevel
        });
        let status = CommentStatus::parse(&model.status).unwrap_or_else(|| {
            warn!(status = %model.status, comment_id = model.id, "Unknown comment status in stored row");
            CommentStatus::Active
        });

        Comment {
            id: EntityId::new(model.id),
            board_id: EntityId::new(model.board_id),
            author_id: EntityId::new(model.author_id),
            content: model.content,
            group_id: model.group_id,
            kind,
            parent_id: model.parent_id.map(EntityId::new),
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values for inserting a comment row
pub struct CommentInsert<'a> {
    pub board_id: i64,
    pub author_id: i64,
    pub content: &'a str,
    pub group_id: i64,
    pub kind: &'static str,
    pub parent_id: Option<i64>,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            board_id: comment.board_id.into_inner(),
            author_id: comment.author_id.into_inner(),
            content: &comment.content,
            group_id: comment.group_id,
            kind: comment.kind.as_str(),
            parent_id: comment.parent_id.map(EntityId::into_inner),
        }
    }
}
