//! Email certification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for email_certifications table
#[derive(Debug, Clone, FromRow)]
pub struct CertificationModel {
    pub email: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
}
