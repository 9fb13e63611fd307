//! PostgreSQL implementation of FollowRepository
//!
//! Follows are soft-deleted through `active` and toggled with the same
//! lock-then-flip transaction as likes.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use moge_core::entities::{Follow, FollowUser};
use moge_core::error::DomainError;
use moge_core::traits::{FollowRepository, RepoResult};
use moge_core::value_objects::{EntityId, ToggleAction, ToggleState};

use crate::models::{FollowModel, FollowUserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn toggle(
        &self,
        follower_id: EntityId,
        following_id: EntityId,
    ) -> RepoResult<ToggleAction> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let target = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM users WHERE id = $1 AND deleted_at IS NULL FOR SHARE",
        )
        .bind(following_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if target.is_none() {
            return Err(DomainError::UserNotFound(following_id));
        }

        let stored = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT active FROM follows
            WHERE follower_id = $1 AND following_id = $2
            FOR UPDATE
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let transition = ToggleState::from_stored(stored).toggle();
        debug!(from = ?transition.from, to = ?transition.to, "Applying follow toggle");

        if transition.is_insert() {
            let result = sqlx::query(
                r#"
                INSERT INTO follows (follower_id, following_id, active)
                VALUES ($1, $2, TRUE)
                ON CONFLICT (follower_id, following_id) DO NOTHING
                "#,
            )
            .bind(follower_id.into_inner())
            .bind(following_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if result.rows_affected() == 0 {
                return Err(DomainError::CreateFailed("follow"));
            }
        } else {
            sqlx::query(
                r#"
                UPDATE follows SET active = $3, updated_at = NOW()
                WHERE follower_id = $1 AND following_id = $2
                "#,
            )
            .bind(follower_id.into_inner())
            .bind(following_id.into_inner())
            .bind(transition.to.is_active())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(transition.action)
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        follower_id: EntityId,
        following_id: EntityId,
    ) -> RepoResult<Option<Follow>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r#"
            SELECT follower_id, following_id, active, created_at, updated_at
            FROM follows
            WHERE follower_id = $1 AND following_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Follow::from))
    }

    #[instrument(skip(self))]
    async fn followings(
        &self,
        user_id: EntityId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<FollowUser>> {
        let results = sqlx::query_as::<_, FollowUserModel>(
            r#"
            SELECT u.id AS user_id, u.nickname, u.profile_image
            FROM follows f
            JOIN users u ON u.id = f.following_id AND u.deleted_at IS NULL
            WHERE f.follower_id = $1 AND f.active
            ORDER BY f.updated_at DESC, u.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(limit.clamp(1, 100))
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FollowUser::from).collect())
    }

    #[instrument(skip(self))]
    async fn followers(
        &self,
        user_id: EntityId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<FollowUser>> {
        let results = sqlx::query_as::<_, FollowUserModel>(
            r#"
            SELECT u.id AS user_id, u.nickname, u.profile_image
            FROM follows f
            JOIN users u ON u.id = f.follower_id AND u.deleted_at IS NULL
            WHERE f.following_id = $1 AND f.active
            ORDER BY f.updated_at DESC, u.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(limit.clamp(1, 100))
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FollowUser::from).collect())
    }

    #[instrument(skip(self))]
    async fn follower_count(&self, user_id: EntityId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE following_id = $1 AND active",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn following_count(&self, user_id: EntityId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE follower_id = $1 AND active",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
