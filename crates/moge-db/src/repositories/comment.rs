//! PostgreSQL implementation of CommentRepository
//!
//! Top-level inserts lock the board row `FOR UPDATE` first, so group numbers
//! are picked and claimed one writer at a time per board.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use moge_core::entities::{Comment, NewComment};
use moge_core::error::DomainError;
use moge_core::traits::{CommentRepository, RepoResult};
use moge_core::value_objects::{CommentKind, EntityId, ReactionSubject};

use crate::mappers::CommentInsert;
use crate::models::CommentModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the board row for the rest of the transaction
    async fn lock_board(tx: &mut Transaction<'_, Postgres>, board_id: EntityId) -> RepoResult<()> {
        let row = sqlx::query_scalar::<_, i64>("SELECT id FROM boards WHERE id = $1 FOR UPDATE")
            .bind(board_id.into_inner())
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::SubjectNotFound {
                subject: ReactionSubject::Board,
                id: board_id,
            }),
        }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, board_id, author_id, content, group_id, kind, parent_id, status,
                   created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, board_id, author_id, content, group_id, kind, parent_id, status,
                   created_at, updated_at
            FROM comments
            WHERE board_id = $1
            ORDER BY group_id, (kind = 'reply'), id
            "#,
        )
        .bind(board_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_group_head(
        &self,
        board_id: EntityId,
        group_id: i64,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, board_id, author_id, content, group_id, kind, parent_id, status,
                   created_at, updated_at
            FROM comments
            WHERE board_id = $1 AND group_id = $2 AND kind = 'top_level'
            "#,
        )
        .bind(board_id.into_inner())
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self, comment), fields(board_id = %comment.board_id, group_id = comment.group_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<EntityId> {
        let insert = CommentInsert::new(comment);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if comment.kind == CommentKind::TopLevel {
            Self::lock_board(&mut tx, comment.board_id).await?;
        }

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (board_id, author_id, content, group_id, kind, parent_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(insert.board_id)
        .bind(insert.author_id)
        .bind(insert.content)
        .bind(insert.group_id)
        .bind(insert.kind)
        .bind(insert.parent_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateGroupParent(comment.group_id)))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(EntityId::new(id))
    }

    #[instrument(skip(self, content))]
    async fn create_in_next_group(
        &self,
        board_id: EntityId,
        author_id: EntityId,
        content: &str,
    ) -> RepoResult<(EntityId, i64)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::lock_board(&mut tx, board_id).await?;

        let (id, group_id) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            INSERT INTO comments (board_id, author_id, content, group_id, kind)
            SELECT $1, $2, $3, COALESCE(MAX(group_id), 0) + 1, 'top_level'
            FROM comments
            WHERE board_id = $1
            RETURNING id, group_id
            "#,
        )
        .bind(board_id.into_inner())
        .bind(author_id.into_inner())
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok((EntityId::new(id), group_id))
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: EntityId, content: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET content = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            "#,
        )
        .bind(id.into_inner())
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn has_replies(&self, id: EntityId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE parent_id = $1)",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn mark_deleted(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET status = 'deleted', updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
