//! User account handlers
//!
//! Every endpoint acts on the caller's own account; the path id must match the
//! token.

use axum::{extract::State, Json};
use moge_service::{
    BoardSummaryResponse, KeywordsRequest, UpdatePasswordRequest, UpdateProfileRequest,
    UserProfileResponse, UserService,
};

use crate::extractors::{AuthUser, IdPath, UserIdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// PATCH /users/:user_id/password
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    UserService::new(state.service_context())
        .update_password(user_id, request)
        .await?;
    Ok(NoContent)
}

/// Pick the three interest categories once
///
/// POST /users/:user_id/keyword
pub async fn set_keywords(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<KeywordsRequest>,
) -> ApiResult<Created<NoContent>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    UserService::new(state.service_context())
        .set_keywords(user_id, request)
        .await?;
    Ok(Created(NoContent))
}

/// Replace the interest categories
///
/// PATCH /users/:user_id/keyword
pub async fn update_keywords(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<KeywordsRequest>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    UserService::new(state.service_context())
        .update_keywords(user_id, request)
        .await?;
    Ok(NoContent)
}

/// GET /users/:user_id/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<Json<UserProfileResponse>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let profile = UserService::new(state.service_context())
        .profile(user_id)
        .await?;
    Ok(Json(profile))
}

/// Change the caller's nickname
///
/// PATCH /users/:user_id/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserProfileResponse>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let profile = UserService::new(state.service_context())
        .update_nickname(user_id, &request.nickname)
        .await?;
    Ok(Json(profile))
}

/// DELETE /users/:user_id/profile-image
pub async fn delete_profile_image(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    UserService::new(state.service_context())
        .clear_profile_image(user_id)
        .await?;
    Ok(NoContent)
}

/// DELETE /users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<NoContent> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    UserService::new(state.service_context())
        .delete_user(user_id)
        .await?;
    Ok(NoContent)
}

/// Boards the user currently likes
///
/// GET /users/:user_id/board/like
pub async fn liked_boards(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<ApiJson<Vec<BoardSummaryResponse>>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let boards = UserService::new(state.service_context())
        .liked_boards(user_id)
        .await?;
    Ok(ApiJson(boards))
}

/// Boards the user wrote
///
/// GET /users/:user_id/board
pub async fn authored_boards(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<ApiJson<Vec<BoardSummaryResponse>>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let boards = UserService::new(state.service_context())
        .authored_boards(user_id)
        .await?;
    Ok(ApiJson(boards))
}
