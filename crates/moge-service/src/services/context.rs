//! Service context - dependency container for services
//!
//! Holds all repositories, the JWT service, and the tunable settings needed by
//! services.

use std::sync::Arc;

use chrono::Duration;
use moge_common::auth::JwtService;
use moge_common::AppConfig;
use moge_core::traits::{
    BoardRepository, CertificationRepository, CommentRepository, FollowRepository,
    QuizRepository, ReactionRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Tunables read from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    /// How long an issued certification code stays valid
    pub code_expiry: Duration,
    /// Rows per page of the follow lists
    pub follow_page_size: i64,
    /// Rows returned by the board rankings
    pub top_board_limit: i64,
}

impl ServiceSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            code_expiry: config.verification.code_expiry(),
            follow_page_size: config.listing.follow_page_size,
            top_board_limit: config.listing.top_board_limit,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            code_expiry: Duration::seconds(1000),
            follow_page_size: 20,
            top_board_limit: 10,
        }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are trait objects so the same services run against
/// PostgreSQL in production and in-memory fakes in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    board_repo: Arc<dyn BoardRepository>,
    quiz_repo: Arc<dyn QuizRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    certification_repo: Arc<dyn CertificationRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    settings: ServiceSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        board_repo: Arc<dyn BoardRepository>,
        quiz_repo: Arc<dyn QuizRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        certification_repo: Arc<dyn CertificationRepository>,
        jwt_service: Arc<JwtService>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            user_repo,
            board_repo,
            quiz_repo,
            comment_repo,
            reaction_repo,
            follow_repo,
            certification_repo,
            jwt_service,
            settings,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the board repository
    pub fn board_repo(&self) -> &dyn BoardRepository {
        self.board_repo.as_ref()
    }

    /// Get the quiz repository
    pub fn quiz_repo(&self) -> &dyn QuizRepository {
        self.quiz_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the certification repository
    pub fn certification_repo(&self) -> &dyn CertificationRepository {
        self.certification_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    board_repo: Option<Arc<dyn BoardRepository>>,
    quiz_repo: Option<Arc<dyn QuizRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    certification_repo: Option<Arc<dyn CertificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    settings: ServiceSettings,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            board_repo: None,
            quiz_repo: None,
            comment_repo: None,
            reaction_repo: None,
            follow_repo: None,
            certification_repo: None,
            jwt_service: None,
            settings: ServiceSettings::default(),
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn board_repo(mut self, repo: Arc<dyn BoardRepository>) -> Self {
        self.board_repo = Some(repo);
        self
    }

    pub fn quiz_repo(mut self, repo: Arc<dyn QuizRepository>) -> Self {
        self.quiz_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn certification_repo(mut self, repo: Arc<dyn CertificationRepository>) -> Self {
        self.certification_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.board_repo
                .ok_or_else(|| ServiceError::validation("board_repo is required"))?,
            self.quiz_repo
                .ok_or_else(|| ServiceError::validation("quiz_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.certification_repo
                .ok_or_else(|| ServiceError::validation("certification_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.settings,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
