//! # moge-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AuthService, BoardService, CertificationService, CommentService, FollowService,
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ServiceSettings, UserService,
};
