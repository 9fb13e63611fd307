//! Test fixtures and data generators
//!
//! Request bodies the way a client sends them and the response shapes the
//! tests read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Password that satisfies the sign-up rules
pub const TEST_PASSWORD: &str = "quiz1234!";

/// Category seeded by the initial migration
pub const GENERAL_CATEGORY: i64 = 1;

/// Unique suffix for test data, also across test runs on a reused database
pub fn unique_suffix() -> u64 {
    let millis = chrono::Utc::now().timestamp_millis().unsigned_abs() % 1_000_000;
    millis * 100 + COUNTER.fetch_add(1, Ordering::SeqCst) % 100
}

/// Sign-up request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub re_password: String,
    pub terms: Vec<bool>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("quiz{suffix}@moge.dev"),
            nickname: format!("m{suffix}"),
            password: TEST_PASSWORD.to_string(),
            re_password: TEST_PASSWORD.to_string(),
            terms: vec![true, true],
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Sign-up and login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub jwt: String,
    pub token_type: String,
}

/// Id of a created row
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Like or follow toggle outcome
#[derive(Debug, Deserialize)]
pub struct ToggleResponse {
    pub subject_id: i64,
    pub user_id: i64,
    pub action: String,
    pub active: bool,
}

/// Board like state
#[derive(Debug, Deserialize)]
pub struct ReactionStateResponse {
    pub active: bool,
    pub like_count: i64,
}

/// Create board request
#[derive(Debug, Serialize)]
pub struct CreateBoardRequest {
    pub title: String,
    pub category_id: i64,
}

impl CreateBoardRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Quiz board {}", unique_suffix()),
            category_id: GENERAL_CATEGORY,
        }
    }
}

/// Board detail
#[derive(Debug, Deserialize)]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    pub view_count: i64,
    pub like_count: i64,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub kind: &'static str,
    pub group_id: Option<i64>,
}

impl CreateCommentRequest {
    pub fn top_level(content: &str) -> Self {
        Self {
            content: content.to_string(),
            kind: "top_level",
            group_id: None,
        }
    }

    pub fn top_level_in(content: &str, group_id: i64) -> Self {
        Self {
            content: content.to_string(),
            kind: "top_level",
            group_id: Some(group_id),
        }
    }

    pub fn reply(content: &str, group_id: i64) -> Self {
        Self {
            content: content.to_string(),
            kind: "reply",
            group_id: Some(group_id),
        }
    }
}

/// Comment as listed
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub group_id: i64,
    pub kind: String,
    pub parent_id: Option<i64>,
    pub status: String,
}

/// Follow toggle request
#[derive(Debug, Serialize)]
pub struct FollowRequest {
    pub user_id: i64,
    pub following_id: i64,
}

/// Page of a follow list
#[derive(Debug, Deserialize)]
pub struct FollowPageResponse {
    pub page: i64,
    pub users: Vec<FollowUserResponse>,
}

#[derive(Debug, Deserialize)]
pub struct FollowUserResponse {
    pub user_id: i64,
    pub nickname: String,
}

/// `{"data": ...}` wrapper used by list endpoints
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
