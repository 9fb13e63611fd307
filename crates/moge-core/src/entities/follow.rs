//! Follow entity - a directed user-to-user relationship

use chrono::{DateTime, Utc};

use crate::value_objects::{EntityId, ToggleState};

/// Stored follow row, soft-deleted through `active`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: EntityId,
    pub following_id: EntityId,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Follow {
    #[inline]
    pub fn state(&self) -> ToggleState {
        ToggleState::from_stored(Some(self.active))
    }
}

/// Entry of a followers/followings listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUser {
    pub user_id: EntityId,
    pub nickname: String,
    pub profile_image: Option<String>,
}
