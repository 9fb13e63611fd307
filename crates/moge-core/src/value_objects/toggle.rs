//! Toggle state machine shared by board likes, comment likes, and follows
//!
//! A toggle record moves through three states:
//!
//! ```text
//!   Absent ──insert──▶ Active ──remove──▶ Inactive
//!                        ▲                   │
//!                        └────reactivate─────┘
//! ```
//!
//! Rows are never physically deleted once created, so `Absent` is only ever
//! the starting point and there is no edge from `Absent` to `Inactive`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Current state of a (subject, user) toggle record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleState {
    /// No row has ever been created
    Absent,
    /// Row exists and is counted
    Active,
    /// Row exists but is soft-deleted
    Inactive,
}

impl ToggleState {
    /// Build the state from a stored `active` column, `None` meaning no row
    #[inline]
    pub fn from_stored(active: Option<bool>) -> Self {
        match active {
            None => Self::Absent,
            Some(true) => Self::Active,
            Some(false) => Self::Inactive,
        }
    }

    /// Compute the transition a toggle applies from this state
    pub fn toggle(self) -> Transition {
        match self {
            Self::Absent => Transition {
                from: self,
                to: Self::Active,
                action: ToggleAction::Added,
            },
            Self::Active => Transition {
                from: self,
                to: Self::Inactive,
                action: ToggleAction::Removed,
            },
            Self::Inactive => Transition {
                from: self,
                to: Self::Active,
                action: ToggleAction::Reactivated,
            },
        }
    }

    /// Whether the record counts towards totals
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether a row exists for this state
    #[inline]
    pub fn is_stored(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Result of a toggle as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Removed,
    Reactivated,
}

impl ToggleAction {
    /// Whether the record is active after this action
    #[inline]
    pub fn is_active_after(self) -> bool {
        !matches!(self, Self::Removed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Reactivated => "reactivated",
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edge of the toggle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ToggleState,
    pub to: ToggleState,
    pub action: ToggleAction,
}

impl Transition {
    /// The transition creates the row rather than updating it
    #[inline]
    pub fn is_insert(&self) -> bool {
        self.from == ToggleState::Absent
    }
}

/// Kind of entity a reaction points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionSubject {
    Board,
    Comment,
}

impl ReactionSubject {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Comment => "comment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "board" => Some(Self::Board),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a reaction record: at most one row exists per key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactionKey {
    pub subject: ReactionSubject,
    pub subject_id: EntityId,
    pub user_id: EntityId,
}

impl ReactionKey {
    pub fn new(subject: ReactionSubject, subject_id: EntityId, user_id: EntityId) -> Self {
        Self {
            subject,
            subject_id,
            user_id,
        }
    }

    pub fn board(board_id: EntityId, user_id: EntityId) -> Self {
        Self::new(ReactionSubject::Board, board_id, user_id)
    }

    pub fn comment(comment_id: EntityId, user_id: EntityId) -> Self {
        Self::new(ReactionSubject::Comment, comment_id, user_id)
    }
}

impl fmt::Display for ReactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.subject, self.subject_id, self.user_id)
    }
}
