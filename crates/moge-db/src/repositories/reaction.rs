//! PostgreSQL implementation of ReactionRepository
//!
//! A toggle is one transaction: the subject row is locked `FOR SHARE` so it
//! cannot disappear mid-toggle, the reaction row is locked `FOR UPDATE` so two
//! toggles by the same user serialize, and the first insert uses
//! `ON CONFLICT DO NOTHING` so a racing first click cannot create a second row.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use moge_core::entities::Reaction;
use moge_core::error::DomainError;
use moge_core::traits::{ReactionRepository, RepoResult};
use moge_core::value_objects::{
    EntityId, ReactionKey, ReactionSubject, ToggleAction, ToggleState,
};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the subject row; `false` when it does not exist
    async fn lock_subject(
        tx: &mut Transaction<'_, Postgres>,
        subject: ReactionSubject,
        subject_id: EntityId,
    ) -> RepoResult<bool> {
        let sql = match subject {
            ReactionSubject::Board => "SELECT id FROM boards WHERE id = $1 FOR SHARE",
            ReactionSubject::Comment => {
                "SELECT id FROM comments WHERE id = $1 AND status = 'active' FOR SHARE"
            }
        };

        let row = sqlx::query_scalar::<_, i64>(sql)
            .bind(subject_id.into_inner())
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(row.is_some())
    }
}

fn create_failed(subject: ReactionSubject) -> DomainError {
    match subject {
        ReactionSubject::Board => DomainError::CreateFailed("board like"),
        ReactionSubject::Comment => DomainError::CreateFailed("comment like"),
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self), fields(key = %key))]
    async fn toggle(&self, key: ReactionKey) -> RepoResult<ToggleAction> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !Self::lock_subject(&mut tx, key.subject, key.subject_id).await? {
            // Dropping the transaction rolls it back; nothing was written
            return Err(DomainError::SubjectNotFound {
                subject: key.subject,
                id: key.subject_id,
            });
        }

        let stored = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT active FROM reactions
            WHERE subject_type = $1 AND subject_id = $2 AND user_id = $3
            FOR UPDATE
            "#,
        )
        .bind(key.subject.as_str())
        .bind(key.subject_id.into_inner())
        .bind(key.user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let transition = ToggleState::from_stored(stored).toggle();
        debug!(from = ?transition.from, to = ?transition.to, "Applying reaction toggle");

        if transition.is_insert() {
            let result = sqlx::query(
                r#"
                INSERT INTO reactions (subject_type, subject_id, user_id, active)
                VALUES ($1, $2, $3, TRUE)
                ON CONFLICT (subject_type, subject_id, user_id) DO NOTHING
                "#,
            )
            .bind(key.subject.as_str())
            .bind(key.subject_id.into_inner())
            .bind(key.user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if result.rows_affected() == 0 {
                return Err(create_failed(key.subject));
            }
        } else {
            sqlx::query(
                r#"
                UPDATE reactions SET active = $4, updated_at = NOW()
                WHERE subject_type = $1 AND subject_id = $2 AND user_id = $3
                "#,
            )
            .bind(key.subject.as_str())
            .bind(key.subject_id.into_inner())
            .bind(key.user_id.into_inner())
            .bind(transition.to.is_active())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(transition.action)
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn find(&self, key: ReactionKey) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT subject_type, subject_id, user_id, active, created_at, updated_at
            FROM reactions
            WHERE subject_type = $1 AND subject_id = $2 AND user_id = $3
            "#,
        )
        .bind(key.subject.as_str())
        .bind(key.subject_id.into_inner())
        .bind(key.user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn count_active(
        &self,
        subject: ReactionSubject,
        subject_id: EntityId,
    ) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions
            WHERE subject_type = $1 AND subject_id = $2 AND active
            "#,
        )
        .bind(subject.as_str())
        .bind(subject_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
