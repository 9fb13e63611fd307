//! Reaction entity - a like on a board or a comment

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionKey, ToggleState};

/// Stored reaction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub key: ReactionKey,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Current state of this stored row (never `Absent`)
    #[inline]
    pub fn state(&self) -> ToggleState {
        ToggleState::from_stored(Some(self.active))
    }
}
