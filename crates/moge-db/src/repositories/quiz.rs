//! PostgreSQL implementation of QuizRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use moge_core::entities::{NewQuiz, Quiz};
use moge_core::traits::{QuizRepository, RepoResult};
use moge_core::value_objects::EntityId;

use crate::mappers::QuizInsert;
use crate::models::QuizModel;

use super::error::map_db_error;

/// PostgreSQL implementation of QuizRepository
#[derive(Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    /// Create a new PgQuizRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    #[instrument(skip(self, quiz), fields(board_id = %quiz.board_id))]
    async fn create(&self, quiz: &NewQuiz) -> RepoResult<EntityId> {
        let insert = QuizInsert::new(quiz);

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO quizzes (board_id, question, quiz_type)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(insert.board_id)
        .bind(insert.question)
        .bind(insert.quiz_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(EntityId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_board(&self, board_id: EntityId) -> RepoResult<Vec<Quiz>> {
        let results = sqlx::query_as::<_, QuizModel>(
            r#"
            SELECT id, board_id, question, quiz_type, created_at
            FROM quizzes
            WHERE board_id = $1
            ORDER BY id
            "#,
        )
        .bind(board_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Quiz::from).collect())
    }
}
