//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in moge-core.
//! Each repository handles database operations for a specific domain entity.

mod board;
mod certification;
mod comment;
mod error;
mod follow;
mod quiz;
mod reaction;
mod user;

pub use board::PgBoardRepository;
pub use certification::PgCertificationRepository;
pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use quiz::PgQuizRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
