//! PostgreSQL implementation of CertificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use moge_core::entities::EmailCertification;
use moge_core::traits::{CertificationRepository, RepoResult};

use crate::models::CertificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CertificationRepository
#[derive(Clone)]
pub struct PgCertificationRepository {
    pool: PgPool,
}

impl PgCertificationRepository {
    /// Create a new PgCertificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificationRepository for PgCertificationRepository {
    #[instrument(skip(self, code))]
    async fn upsert(&self, email: &str, code: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO email_certifications (email, code, issued_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (email) DO UPDATE SET code = EXCLUDED.code, issued_at = EXCLUDED.issued_at
            "#,
        )
        .bind(email)
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, email: &str) -> RepoResult<Option<EmailCertification>> {
        let result = sqlx::query_as::<_, CertificationModel>(
            "SELECT email, code, issued_at FROM email_certifications WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(EmailCertification::from))
    }
}
