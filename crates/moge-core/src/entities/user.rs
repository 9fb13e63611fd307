//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: EntityId, email: String, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            nickname,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the nickname
    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }
}

/// Values needed to insert a user; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub nickname: String,
    pub password_hash: String,
}

/// Interest category a board is filed under and users pick as keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

/// Profile view with follow counters and chosen keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub follower_count: i64,
    pub following_count: i64,
    pub keywords: Vec<Category>,
}
