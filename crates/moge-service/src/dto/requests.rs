//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Rules that need more than a length check (password strength, nickname
//! alphabet, matching confirmations) are applied by the services.

use moge_core::{CommentKind, EntityId, QuizType};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 10, message = "Nickname must be 2-10 characters"))]
    pub nickname: String,

    #[validate(length(min = 8, max = 20, message = "Password must be 8-20 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub re_password: String,

    /// Agreement flags shown on the sign-up form
    #[validate(length(min = 1, message = "Terms are required"))]
    pub terms: Vec<bool>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Email availability check
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmailCheckRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Nickname availability check
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NicknameCheckRequest {
    #[validate(length(min = 2, max = 10, message = "Nickname must be 2-10 characters"))]
    pub nickname: String,
}

// ============================================================================
// Certification Requests
// ============================================================================

/// Ask for a certification code to be issued
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendCertificationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Submit a received certification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCertificationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 20, message = "Password must be 8-20 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub re_password: String,
}

/// Nickname change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 10, message = "Nickname must be 2-10 characters"))]
    pub nickname: String,
}

/// Keyword selection; the count rule is checked by the service
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct KeywordsRequest {
    pub category_ids: Vec<EntityId>,
}

/// Follow toggle request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FollowRequest {
    /// Must be the caller
    pub user_id: EntityId,
    pub following_id: EntityId,
}

/// 1-based page selector for list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: default_page() }
    }
}

// ============================================================================
// Board Requests
// ============================================================================

/// Create board request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    pub category_id: EntityId,
}

/// Create quiz request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    pub quiz_type: QuizType,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
///
/// A reply names the group it answers. A top-level comment may name a fresh
/// group; when it does not, the next free group of the board is used.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,

    pub kind: CommentKind,

    #[validate(range(min = 1, message = "Group must be positive"))]
    pub group_id: Option<i64>,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}
