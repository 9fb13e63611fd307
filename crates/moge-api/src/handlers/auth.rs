//! Sign-up, login, and email certification handlers

use axum::{extract::State, Json};
use moge_service::{
    AuthResponse, AuthService, AvailabilityResponse, CertificationIssuedResponse,
    CertificationService, CertificationVerifiedResponse, EmailCheckRequest, LoginRequest,
    NicknameCheckRequest, RegisterRequest, SendCertificationRequest, VerifyCertificationRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /users/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// POST /users/validate-email
pub async fn validate_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmailCheckRequest>,
) -> ApiResult<Json<AvailabilityResponse>> {
    AuthService::new(state.service_context())
        .check_email(&request.email)
        .await?;
    Ok(Json(AvailabilityResponse { available: true }))
}

/// POST /users/validate-nickname
pub async fn validate_nickname(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NicknameCheckRequest>,
) -> ApiResult<Json<AvailabilityResponse>> {
    AuthService::new(state.service_context())
        .check_nickname(&request.nickname)
        .await?;
    Ok(Json(AvailabilityResponse { available: true }))
}

/// Login with email and password
///
/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Issue an email certification code
///
/// POST /users/send-email
pub async fn send_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendCertificationRequest>,
) -> ApiResult<Json<CertificationIssuedResponse>> {
    let service = CertificationService::new(state.service_context());
    let response = service.issue(&request.email).await?;
    Ok(Json(response))
}

/// Check a certification code
///
/// POST /users/login/check-email
pub async fn check_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyCertificationRequest>,
) -> ApiResult<Json<CertificationVerifiedResponse>> {
    let service = CertificationService::new(state.service_context());
    let response = service.verify(&request.email, &request.code).await?;
    Ok(Json(response))
}
