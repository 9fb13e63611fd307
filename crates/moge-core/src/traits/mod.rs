//! Repository traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    BoardRepository, CertificationRepository, CommentRepository, FollowRepository, QuizRepository,
    ReactionRepository, RepoResult, UserRepository,
};
