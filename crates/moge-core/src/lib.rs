//! # moge-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! toggle state machine shared by likes and follows.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Board, BoardSummary, Category, Comment, CommentStatus, EmailCertification, Follow,
    DELETED_COMMENT_CONTENT,
    FollowUser, NewBoard, NewComment, NewQuiz, NewUser, Quiz, QuizType, Reaction, User,
    UserProfile,
};
pub use error::DomainError;
pub use traits::{
    BoardRepository, CertificationRepository, CommentRepository, FollowRepository, QuizRepository,
    ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    CommentKind, EntityId, EntityIdParseError, ReactionKey, ReactionSubject, ToggleAction,
    ToggleState, Transition,
};
