//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateBoardRequest, CreateCommentRequest, CreateQuizRequest, EmailCheckRequest,
    FollowRequest, KeywordsRequest, LoginRequest, NicknameCheckRequest, PageQuery,
    RegisterRequest, SendCertificationRequest, UpdateCommentRequest, UpdatePasswordRequest,
    UpdateProfileRequest, VerifyCertificationRequest,
};

pub use responses::{
    ApiResponse, AuthResponse, AvailabilityResponse, BoardResponse, BoardSummaryResponse,
    CategoryResponse, CertificationIssuedResponse, CertificationVerifiedResponse,
    CommentResponse, CreatedResponse, FollowPageResponse, FollowUserResponse, HealthChecks,
    HealthResponse, QuizResponse, ReactionStateResponse, ReadinessResponse, ToggleResponse,
    UserProfileResponse,
};

pub use mappers::{BoardWithLikes, IssuedToken};
