//! Authentication service
//!
//! Handles sign-up, login, and the availability checks used by the sign-up
//! form.

use moge_common::auth::{hash_password, validate_nickname, validate_password_rules, verify_password};
use moge_core::{DomainError, EntityId, NewUser};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, IssuedToken, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign them in
    #[instrument(skip(self, request), fields(email = %request.email, nickname = %request.nickname))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let email = request.email.trim();
        let nickname = request.nickname.trim();

        if !request.terms.iter().any(|accepted| *accepted) {
            return Err(DomainError::ValidationError("terms must be accepted".into()).into());
        }
        validate_nickname(nickname)?;
        validate_password_rules(&request.password)?;
        if request.password != request.re_password {
            return Err(DomainError::PasswordMismatch.into());
        }

        self.ensure_email_available(email).await?;
        self.ensure_nickname_available(nickname).await?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self
            .ctx
            .user_repo()
            .create(&NewUser {
                email: email.to_string(),
                nickname: nickname.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user_id, "User registered successfully");

        self.issue(user_id)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(DomainError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue(user.id)
    }

    /// Fail with `EmailAlreadyExists` when a live account uses the email
    #[instrument(skip(self))]
    pub async fn check_email(&self, email: &str) -> ServiceResult<()> {
        self.ensure_email_available(email.trim()).await
    }

    /// Fail with `NicknameAlreadyExists` when a live account uses the nickname
    #[instrument(skip(self))]
    pub async fn check_nickname(&self, nickname: &str) -> ServiceResult<()> {
        let nickname = nickname.trim();
        validate_nickname(nickname)?;
        self.ensure_nickname_available(nickname).await
    }

    async fn ensure_email_available(&self, email: &str) -> ServiceResult<()> {
        if self.ctx.user_repo().email_exists(email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        Ok(())
    }

    async fn ensure_nickname_available(&self, nickname: &str) -> ServiceResult<()> {
        if self.ctx.user_repo().nickname_exists(nickname).await? {
            return Err(DomainError::NicknameAlreadyExists.into());
        }
        Ok(())
    }

    fn issue(&self, user_id: EntityId) -> ServiceResult<AuthResponse> {
        let token = self.ctx.jwt_service().issue_access_token(user_id)?;
        Ok(IssuedToken { user_id, token }.into())
    }
}
