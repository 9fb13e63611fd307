//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates validation and repository calls.

pub mod auth;
pub mod board;
pub mod certification;
pub mod comment;
pub mod context;
pub mod error;
pub mod follow;
pub mod reaction;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use board::BoardService;
pub use certification::CertificationService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder, ServiceSettings};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use reaction::ReactionService;
pub use user::UserService;
