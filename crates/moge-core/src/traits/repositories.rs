//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. Every method reports storage faults as
//! `DomainError::DatabaseError`.

use async_trait::async_trait;

use crate::entities::{
    Board, BoardSummary, Category, Comment, EmailCertification, Follow, FollowUser, NewBoard,
    NewComment, NewQuiz, NewUser, Quiz, Reaction, User,
};
use crate::error::DomainError;
use crate::value_objects::{EntityId, ReactionKey, ReactionSubject, ToggleAction};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live (not deleted) user by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>>;

    /// Find a live user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if nickname is already taken
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool>;

    /// Create a new user and return its id
    async fn create(&self, user: &NewUser) -> RepoResult<EntityId>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: EntityId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: EntityId, password_hash: &str) -> RepoResult<bool>;

    /// Update nickname, returning whether a row changed
    async fn update_nickname(&self, id: EntityId, nickname: &str) -> RepoResult<bool>;

    /// Clear the stored profile image
    async fn clear_profile_image(&self, id: EntityId) -> RepoResult<bool>;

    /// Soft delete a user
    async fn delete(&self, id: EntityId) -> RepoResult<bool>;

    /// Categories chosen as the user's keywords
    async fn keywords(&self, user_id: EntityId) -> RepoResult<Vec<Category>>;

    /// Replace the user's keywords with the given categories
    async fn replace_keywords(&self, user_id: EntityId, category_ids: &[EntityId])
        -> RepoResult<()>;
}

// ============================================================================
// Board Repository
// ============================================================================

#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Check whether a board exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Find board by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Board>>;

    /// Create a new board and return its id
    async fn create(&self, board: &NewBoard) -> RepoResult<EntityId>;

    /// Bump the view counter
    async fn increment_view_count(&self, id: EntityId) -> RepoResult<bool>;

    /// Check whether a category exists
    async fn category_exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Boards ranked by active like count
    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<BoardSummary>>;

    /// Boards ranked by view count
    async fn top_by_views(&self, limit: i64) -> RepoResult<Vec<BoardSummary>>;

    /// Boards the user currently likes
    async fn liked_by_user(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>>;

    /// Boards written by the user
    async fn by_author(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>>;
}

// ============================================================================
// Quiz Repository
// ============================================================================

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Create a quiz and return its id
    async fn create(&self, quiz: &NewQuiz) -> RepoResult<EntityId>;

    /// List quizzes of a board in creation order
    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Quiz>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Comment>>;

    /// List a board's comments ordered by group, top-level first
    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Comment>>;

    /// Find the top-level comment that opened a group
    async fn find_group_head(&self, board_id: EntityId, group_id: i64)
        -> RepoResult<Option<Comment>>;

    /// Create a comment and return its id
    ///
    /// A second top-level comment for the same group fails with
    /// `DomainError::DuplicateGroupParent`.
    async fn create(&self, comment: &NewComment) -> RepoResult<EntityId>;

    /// Open the board's next unused group with a top-level comment
    ///
    /// Picking the group number and inserting happen atomically, so
    /// concurrent callers always get distinct groups. Returns the comment id
    /// and its group.
    async fn create_in_next_group(
        &self,
        board_id: EntityId,
        author_id: EntityId,
        content: &str,
    ) -> RepoResult<(EntityId, i64)>;

    /// Replace the content, returning whether a row changed
    async fn update_content(&self, id: EntityId, content: &str) -> RepoResult<bool>;

    /// Whether any reply still points at this comment
    async fn has_replies(&self, id: EntityId) -> RepoResult<bool>;

    /// Physically remove a comment
    async fn delete(&self, id: EntityId) -> RepoResult<bool>;

    /// Mark a comment deleted while keeping the row
    async fn mark_deleted(&self, id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Apply one toggle to the reaction identified by `key`
    ///
    /// Fails with `DomainError::SubjectNotFound` (without writing) when the
    /// subject does not exist, and with `DomainError::CreateFailed` when the
    /// first insert did not store a row.
    async fn toggle(&self, key: ReactionKey) -> RepoResult<ToggleAction>;

    /// Stored reaction row, if one was ever created
    async fn find(&self, key: ReactionKey) -> RepoResult<Option<Reaction>>;

    /// Number of active reactions on a subject
    async fn count_active(&self, subject: ReactionSubject, subject_id: EntityId)
        -> RepoResult<i64>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Apply one toggle to the follow from `follower_id` to `following_id`
    ///
    /// Fails with `DomainError::UserNotFound` when the followed user does not exist.
    async fn toggle(&self, follower_id: EntityId, following_id: EntityId)
        -> RepoResult<ToggleAction>;

    /// Stored follow row, if one was ever created
    async fn find(&self, follower_id: EntityId, following_id: EntityId)
        -> RepoResult<Option<Follow>>;

    /// Users followed by `user_id`
    async fn followings(&self, user_id: EntityId, limit: i64, offset: i64)
        -> RepoResult<Vec<FollowUser>>;

    /// Users following `user_id`
    async fn followers(&self, user_id: EntityId, limit: i64, offset: i64)
        -> RepoResult<Vec<FollowUser>>;

    /// Number of active followers
    async fn follower_count(&self, user_id: EntityId) -> RepoResult<i64>;

    /// Number of active followings
    async fn following_count(&self, user_id: EntityId) -> RepoResult<i64>;
}

// ============================================================================
// Certification Repository
// ============================================================================

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// Store a code for the email, replacing any earlier one
    async fn upsert(&self, email: &str, code: &str) -> RepoResult<()>;

    /// Most recent code issued for the email
    async fn find(&self, email: &str) -> RepoResult<Option<EmailCertification>>;
}
