//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON serialization.

use chrono::{DateTime, Utc};
use moge_core::{CommentKind, CommentStatus, EntityId, QuizType, ReactionSubject, ToggleAction};
use serde::Serialize;

// ============================================================================
// Generic Responses
// ============================================================================

/// Envelope for successful payloads
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Id of a freshly created row
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreatedResponse {
    pub id: EntityId,
}

/// Result of an availability check
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Sign-up and login response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user_id: EntityId,
    pub jwt: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Issued certification code
///
/// Delivery by mail is out of scope, so the code is handed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationIssuedResponse {
    pub email: String,
    pub code: String,
    pub expires_in: i64,
}

/// Outcome of a successful certification check
#[derive(Debug, Clone, Serialize)]
pub struct CertificationVerifiedResponse {
    pub email: String,
    pub verified: bool,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: EntityId,
    pub name: String,
}

/// Profile page of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub user_id: EntityId,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    pub keywords: Vec<CategoryResponse>,
    pub created_at: DateTime<Utc>,
}

/// Entry in a follow list
#[derive(Debug, Clone, Serialize)]
pub struct FollowUserResponse {
    pub user_id: EntityId,
    pub nickname: String,
    pub profile_image: Option<String>,
}

/// One page of a follow list
#[derive(Debug, Clone, Serialize)]
pub struct FollowPageResponse {
    pub page: i64,
    pub page_size: i64,
    pub users: Vec<FollowUserResponse>,
}

// ============================================================================
// Toggle Responses
// ============================================================================

/// Result of toggling a like or a follow
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToggleResponse {
    pub subject_id: EntityId,
    pub user_id: EntityId,
    pub action: ToggleAction,
    pub active: bool,
}

impl ToggleResponse {
    pub fn new(subject_id: EntityId, user_id: EntityId, action: ToggleAction) -> Self {
        Self {
            subject_id,
            user_id,
            action,
            active: action.is_active_after(),
        }
    }
}

/// Current reaction of a user on a subject plus the subject's total
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionStateResponse {
    pub subject: ReactionSubject,
    pub subject_id: EntityId,
    pub user_id: EntityId,
    pub active: bool,
    pub like_count: i64,
}

// ============================================================================
// Board Responses
// ============================================================================

/// Board detail
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub id: EntityId,
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Board row in rankings and user pages
#[derive(Debug, Clone, Serialize)]
pub struct BoardSummaryResponse {
    pub board_id: EntityId,
    pub title: String,
    pub category_name: String,
    pub quiz_count: i64,
    pub view_count: i64,
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub id: EntityId,
    pub board_id: EntityId,
    pub question: String,
    pub quiz_type: QuizType,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment as shown to readers; deleted heads show placeholder text
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: EntityId,
    pub board_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub group_id: i64,
    pub kind: CommentKind,
    pub parent_id: Option<EntityId>,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
