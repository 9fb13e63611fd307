//! Error handling utilities for repositories

use moge_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
///
/// The driver message is logged here; callers only see `DATABASE_ERROR`.
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database query failed");
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Pick the conflict error for a unique violation on the users table
pub fn user_unique_violation(e: SqlxError) -> DomainError {
    let nickname = e
        .as_database_error()
        .and_then(|db_err| db_err.constraint())
        .is_some_and(|c| c.contains("nickname"));
    map_unique_violation(e, || {
        if nickname {
            DomainError::NicknameAlreadyExists
        } else {
            DomainError::EmailAlreadyExists
        }
    })
}
