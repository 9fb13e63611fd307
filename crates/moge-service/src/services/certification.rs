//! Email certification service
//!
//! Issues six-digit codes and checks them against the configured expiry
//! window.

use chrono::Utc;
use moge_common::generate_verification_code;
use moge_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CertificationIssuedResponse, CertificationVerifiedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Email certification service
pub struct CertificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CertificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate and store a code for the email, replacing any earlier one
    #[instrument(skip(self))]
    pub async fn issue(&self, email: &str) -> ServiceResult<CertificationIssuedResponse> {
        let email = email.trim();
        let code = generate_verification_code();
        self.ctx.certification_repo().upsert(email, &code).await?;

        info!(email = %email, "Certification code issued");

        Ok(CertificationIssuedResponse {
            email: email.to_string(),
            code,
            expires_in: self.ctx.settings().code_expiry.num_seconds(),
        })
    }

    /// Check a submitted code
    ///
    /// Reports a missing request first, then expiry, then a wrong code.
    #[instrument(skip(self, code))]
    pub async fn verify(
        &self,
        email: &str,
        code: &str,
    ) -> ServiceResult<CertificationVerifiedResponse> {
        let email = email.trim();
        let certification = self
            .ctx
            .certification_repo()
            .find(email)
            .await?
            .ok_or(DomainError::CertificationNotRequested)?;

        if certification.is_expired_at(Utc::now(), self.ctx.settings().code_expiry) {
            warn!(email = %email, "Certification code expired");
            return Err(DomainError::CertificationExpired.into());
        }

        if !certification.matches(code.trim()) {
            warn!(email = %email, "Certification code mismatch");
            return Err(DomainError::CertificationCodeMismatch.into());
        }

        info!(email = %email, "Email certified");

        Ok(CertificationVerifiedResponse {
            email: email.to_string(),
            verified: true,
        })
    }
}
