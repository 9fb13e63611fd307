//! # moge-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `moge-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional like/follow toggle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moge_core::{ReactionKey, ReactionRepository, EntityId};
//! use moge_db::{create_pool, run_migrations, DatabaseConfig, PgReactionRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let reactions = PgReactionRepository::new(pool);
//!     let action = reactions.toggle(ReactionKey::board(EntityId::new(42), EntityId::new(7))).await?;
//!     println!("{action}");
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgBoardRepository, PgCertificationRepository, PgCommentRepository, PgFollowRepository,
    PgQuizRepository, PgReactionRepository, PgUserRepository,
};
