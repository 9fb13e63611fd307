//! Domain entities - core business objects

mod board;
mod certification;
mod comment;
mod follow;
mod reaction;
mod user;

pub use board::{Board, BoardSummary, NewBoard, NewQuiz, Quiz, QuizType};
pub use certification::EmailCertification;
pub use comment::{Comment, CommentStatus, NewComment, DELETED_COMMENT_CONTENT};
pub use follow::{Follow, FollowUser};
pub use reaction::Reaction;
pub use user::{Category, NewUser, User, UserProfile};
