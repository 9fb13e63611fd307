//! Comment entity - top-level comments and their replies
//!
//! Comments on a board are organised in groups: a top-level comment opens a
//! group and every reply in that group points back at it through `parent_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CommentKind, EntityId};

/// Placeholder shown in place of a deleted comment that still has replies
pub const DELETED_COMMENT_CONTENT: &str = "deleted comment";

/// Visibility of a comment row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStatus {
    Active,
    Deleted,
}

impl CommentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: EntityId,
    pub board_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub group_id: i64,
    pub kind: CommentKind,
    /// Top-level comment of the group; `None` for top-level comments
    pub parent_id: Option<EntityId>,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.kind.is_reply()
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.status == CommentStatus::Deleted
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: EntityId) -> bool {
        self.author_id == user_id
    }

    /// Content to show to readers
    pub fn visible_content(&self) -> &str {
        if self.is_deleted() {
            DELETED_COMMENT_CONTENT
        } else {
            &self.content
        }
    }
}

/// Values needed to insert a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub board_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub group_id: i64,
    pub kind: CommentKind,
    pub parent_id: Option<EntityId>,
}
