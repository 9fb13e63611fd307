//! Database models - SQLx-compatible structs for PostgreSQL tables

mod board;
mod certification;
mod comment;
mod follow;
mod reaction;
mod user;

pub use board::{BoardModel, BoardSummaryModel, QuizModel};
pub use certification::CertificationModel;
pub use comment::CommentModel;
pub use follow::{FollowModel, FollowUserModel};
pub use reaction::ReactionModel;
pub use user::{CategoryModel, UserModel};
