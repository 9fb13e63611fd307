//! Follow database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub follower_id: i64,
    pub following_id: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User row joined into follower/following listings
#[derive(Debug, Clone, FromRow)]
pub struct FollowUserModel {
    pub user_id: i64,
    pub nickname: String,
    pub profile_image: Option<String>,
}
