//! PostgreSQL implementation of BoardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use moge_core::entities::{Board, BoardSummary, NewBoard};
use moge_core::traits::{BoardRepository, RepoResult};
use moge_core::value_objects::EntityId;

use crate::models::{BoardModel, BoardSummaryModel};

use super::error::map_db_error;

/// Listing projection shared by rankings and per-user lists
const SUMMARY_SELECT: &str = r#"
    SELECT b.id AS board_id,
           b.title,
           c.name AS category_name,
           (SELECT COUNT(*) FROM quizzes q WHERE q.board_id = b.id) AS quiz_count,
           b.view_count,
           (SELECT COUNT(*) FROM reactions r
             WHERE r.subject_type = 'board' AND r.subject_id = b.id AND r.active) AS like_count
    FROM boards b
    JOIN categories c ON c.id = b.category_id
"#;

/// PostgreSQL implementation of BoardRepository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    /// Create a new PgBoardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn summaries(&self, tail: &str, bind: i64) -> RepoResult<Vec<BoardSummary>> {
        let sql = format!("{SUMMARY_SELECT} {tail}");
        let results = sqlx::query_as::<_, BoardSummaryModel>(&sql)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(BoardSummary::from).collect())
    }
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM boards WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Board>> {
        let result = sqlx::query_as::<_, BoardModel>(
            r#"
            SELECT id, author_id, category_id, title, view_count, created_at, updated_at
            FROM boards
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Board::from))
    }

    #[instrument(skip(self, board), fields(author_id = %board.author_id))]
    async fn create(&self, board: &NewBoard) -> RepoResult<EntityId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO boards (author_id, category_id, title)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(board.author_id.into_inner())
        .bind(board.category_id.into_inner())
        .bind(&board.title)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EntityId::new(id))
    }

    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE boards SET view_count = view_count + 1 WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn category_exists(&self, id: EntityId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<BoardSummary>> {
        self.summaries("ORDER BY like_count DESC, b.id DESC LIMIT $1", limit.clamp(1, 100))
            .await
    }

    #[instrument(skip(self))]
    async fn top_by_views(&self, limit: i64) -> RepoResult<Vec<BoardSummary>> {
        self.summaries("ORDER BY b.view_count DESC, b.id DESC LIMIT $1", limit.clamp(1, 100))
            .await
    }

    #[instrument(skip(self))]
    async fn liked_by_user(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>> {
        self.summaries(
            r#"
            JOIN reactions mine
              ON mine.subject_type = 'board' AND mine.subject_id = b.id
             AND mine.user_id = $1 AND mine.active
            ORDER BY mine.updated_at DESC
            "#,
            user_id.into_inner(),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn by_author(&self, user_id: EntityId) -> RepoResult<Vec<BoardSummary>> {
        self.summaries(
            "WHERE b.author_id = $1 ORDER BY b.id DESC",
            user_id.into_inner(),
        )
        .await
    }
}
