//! Follow handlers

use axum::{extract::State, Json};
use moge_service::{FollowPageResponse, FollowRequest, FollowService, ToggleResponse};

use crate::extractors::{AuthUser, IdPath, Page, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Follow, unfollow, or re-follow a user
///
/// POST /users/follow
pub async fn toggle_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<FollowRequest>,
) -> ApiResult<Json<ToggleResponse>> {
    auth.ensure_is(request.user_id)?;
    let response = FollowService::new(state.service_context())
        .toggle_follow(auth.user_id, request.following_id)
        .await?;
    Ok(Json(response))
}

/// GET /users/:user_id/following?page=
pub async fn followings(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    Page(page): Page,
) -> ApiResult<Json<FollowPageResponse>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let response = FollowService::new(state.service_context())
        .followings(user_id, page)
        .await?;
    Ok(Json(response))
}

/// GET /users/:user_id/follower?page=
pub async fn followers(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    Page(page): Page,
) -> ApiResult<Json<FollowPageResponse>> {
    let user_id = path.user_id()?;
    auth.ensure_is(user_id)?;
    let response = FollowService::new(state.service_context())
        .followers(user_id, page)
        .await?;
    Ok(Json(response))
}
