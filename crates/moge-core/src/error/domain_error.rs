//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EntityId, ReactionSubject};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{subject} not found: {id}")]
    SubjectNotFound { subject: ReactionSubject, id: EntityId },

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Board not found: {0}")]
    BoardNotFound(EntityId),

    #[error("Comment not found: {0}")]
    CommentNotFound(EntityId),

    #[error("Comment group not found: {0}")]
    GroupNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Page must be greater than 0")]
    InvalidPage,

    #[error("Exactly {expected} keywords are required")]
    InvalidKeywordCount { expected: usize },

    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Caller does not match the requested user")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not comment author")]
    NotCommentAuthor,

    #[error("Not board author")]
    NotBoardAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Nickname already in use")]
    NicknameAlreadyExists,

    #[error("Comment group {0} already has a top-level comment")]
    DuplicateGroupParent(i64),

    #[error("Keywords already set")]
    KeywordsAlreadySet,

    // =========================================================================
    // Certification Errors
    // =========================================================================
    #[error("No certification code was requested for this email")]
    CertificationNotRequested,

    #[error("Certification code has expired")]
    CertificationExpired,

    #[error("Certification code does not match")]
    CertificationCodeMismatch,

    // =========================================================================
    // Write Failures
    // =========================================================================
    #[error("Failed to create {0}")]
    CreateFailed(&'static str),

    #[error("Failed to update {0}")]
    UpdateFailed(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::SubjectNotFound {
                subject: ReactionSubject::Board,
                ..
            } => "BOARD_NOT_EXISTS",
            Self::SubjectNotFound {
                subject: ReactionSubject::Comment,
                ..
            } => "COMMENT_NOT_EXISTS",
            Self::UserNotFound(_) => "USER_NOT_EXISTS",
            Self::BoardNotFound(_) => "BOARD_NOT_EXISTS",
            Self::CommentNotFound(_) => "COMMENT_NOT_EXISTS",
            Self::GroupNotFound(_) => "GROUP_NOT_EXISTS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::InvalidPage => "INVALID_PAGE",
            Self::InvalidKeywordCount { .. } => "INVALID_KEYWORD_COUNT",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",

            // Authentication / Authorization
            Self::Unauthorized => "INVALID_USER_JWT",
            Self::InvalidCredentials => "FAILED_TO_LOGIN",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotBoardAuthor => "NOT_BOARD_AUTHOR",

            // Conflict
            Self::EmailAlreadyExists => "DUPLICATED_EMAIL",
            Self::NicknameAlreadyExists => "DUPLICATED_NICKNAME",
            Self::DuplicateGroupParent(_) => "DUPLICATED_GROUP_PARENT",
            Self::KeywordsAlreadySet => "KEYWORDS_ALREADY_SET",

            // Certification
            Self::CertificationNotRequested => "CERTIFICATION_NOT_REQUESTED",
            Self::CertificationExpired => "CERTIFICATION_EXPIRED",
            Self::CertificationCodeMismatch => "CERTIFICATION_CODE_MISMATCH",

            // Write failures
            Self::CreateFailed(_) => "FAILED_TO_CREATE",
            Self::UpdateFailed(_) => "FAILED_TO_UPDATE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SubjectNotFound { .. }
                | Self::UserNotFound(_)
                | Self::BoardNotFound(_)
                | Self::CommentNotFound(_)
                | Self::GroupNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::PasswordMismatch
                | Self::InvalidPage
                | Self::InvalidKeywordCount { .. }
                | Self::CannotFollowSelf
                | Self::CertificationNotRequested
                | Self::CertificationExpired
                | Self::CertificationCodeMismatch
        )
    }

    /// Check if the caller lacks the identity for this request
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NotCommentAuthor | Self::NotBoardAuthor
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::NicknameAlreadyExists
                | Self::DuplicateGroupParent(_)
                | Self::KeywordsAlreadySet
                | Self::CreateFailed(_)
                | Self::UpdateFailed(_)
        )
    }
}
