//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use moge_core::entities::{Category, NewUser, User};
use moge_core::traits::{RepoResult, UserRepository};
use moge_core::value_objects::EntityId;

use crate::mappers::UserInsert;
use crate::models::{CategoryModel, UserModel};

use super::error::{map_db_error, user_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, nickname, profile_image, created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, nickname, profile_image, created_at, updated_at, deleted_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at IS NULL)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1 AND deleted_at IS NULL)
            "#,
        )
        .bind(nickname)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: &NewUser) -> RepoResult<EntityId> {
        let insert = UserInsert::new(user);

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, nickname, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(insert.email)
        .bind(insert.nickname)
        .bind(insert.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(user_unique_violation)?;

        Ok(EntityId::new(id))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: EntityId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT password_hash FROM users WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: EntityId, password_hash: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET password_hash = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn update_nickname(&self, id: EntityId, nickname: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET nickname = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(nickname)
        .execute(&self.pool)
        .await
        .map_err(user_unique_violation)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn clear_profile_image(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET profile_image = NULL, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn keywords(&self, user_id: EntityId) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT c.id, c.name
            FROM user_keywords k
            JOIN categories c ON c.id = k.category_id
            WHERE k.user_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn replace_keywords(
        &self,
        user_id: EntityId,
        category_ids: &[EntityId],
    ) -> RepoResult<()> {
        let ids: Vec<i64> = category_ids.iter().map(|id| id.into_inner()).collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM user_keywords WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO user_keywords (user_id, category_id)
            SELECT $1, UNNEST($2::BIGINT[])
            "#,
        )
        .bind(user_id.into_inner())
        .bind(&ids)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
