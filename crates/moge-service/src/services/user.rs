//! User service
//!
//! Account maintenance, keyword selection, and the per-user board pages.

use std::collections::HashSet;

use moge_common::auth::{hash_password, validate_nickname, validate_password_rules};
use moge_core::{DomainError, EntityId, User, UserProfile};
use tracing::{info, instrument};

use crate::dto::{
    BoardSummaryResponse, KeywordsRequest, UpdatePasswordRequest, UserProfileResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of categories a user picks as keywords
pub const KEYWORD_COUNT: usize = 3;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a live user or fail with `UserNotFound`
    async fn require_user(&self, user_id: EntityId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Profile with follow counts and keywords
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn profile(&self, user_id: EntityId) -> ServiceResult<UserProfileResponse> {
        let user = self.require_user(user_id).await?;
        let follower_count = self.ctx.follow_repo().follower_count(user_id).await?;
        let following_count = self.ctx.follow_repo().following_count(user_id).await?;
        let keywords = self.ctx.user_repo().keywords(user_id).await?;

        Ok(UserProfile {
            user,
            follower_count,
            following_count,
            keywords,
        }
        .into())
    }

    /// Change the password after checking the confirmation
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn update_password(
        &self,
        user_id: EntityId,
        request: UpdatePasswordRequest,
    ) -> ServiceResult<()> {
        validate_password_rules(&request.password)?;
        if request.password != request.re_password {
            return Err(DomainError::PasswordMismatch.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        if !self
            .ctx
            .user_repo()
            .update_password(user_id, &password_hash)
            .await?
        {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        info!(user_id = %user_id, "Password updated");
        Ok(())
    }

    /// Change the nickname, keeping nicknames unique among live users
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn update_nickname(
        &self,
        user_id: EntityId,
        nickname: &str,
    ) -> ServiceResult<UserProfileResponse> {
        let nickname = nickname.trim();
        validate_nickname(nickname)?;

        let user = self.require_user(user_id).await?;
        if user.nickname != nickname && self.ctx.user_repo().nickname_exists(nickname).await? {
            return Err(DomainError::NicknameAlreadyExists.into());
        }

        if !self.ctx.user_repo().update_nickname(user_id, nickname).await? {
            return Err(DomainError::UpdateFailed("nickname").into());
        }

        info!(user_id = %user_id, nickname = %nickname, "Nickname updated");
        self.profile(user_id).await
    }

    /// Remove the profile image
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn clear_profile_image(&self, user_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.user_repo().clear_profile_image(user_id).await? {
            return Err(DomainError::UserNotFound(user_id).into());
        }
        Ok(())
    }

    /// Soft delete the account
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_user(&self, user_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.user_repo().delete(user_id).await? {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }

    /// First keyword selection after sign-up
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn set_keywords(
        &self,
        user_id: EntityId,
        request: KeywordsRequest,
    ) -> ServiceResult<()> {
        let category_ids = self.checked_keywords(&request.category_ids).await?;
        self.require_user(user_id).await?;

        if !self.ctx.user_repo().keywords(user_id).await?.is_empty() {
            return Err(DomainError::KeywordsAlreadySet.into());
        }

        self.ctx
            .user_repo()
            .replace_keywords(user_id, &category_ids)
            .await?;

        info!(user_id = %user_id, "Keywords set");
        Ok(())
    }

    /// Replace an existing keyword selection
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn update_keywords(
        &self,
        user_id: EntityId,
        request: KeywordsRequest,
    ) -> ServiceResult<()> {
        let category_ids = self.checked_keywords(&request.category_ids).await?;
        self.require_user(user_id).await?;

        self.ctx
            .user_repo()
            .replace_keywords(user_id, &category_ids)
            .await?;

        info!(user_id = %user_id, "Keywords updated");
        Ok(())
    }

    /// Exactly three distinct, existing categories
    async fn checked_keywords(&self, requested: &[EntityId]) -> ServiceResult<Vec<EntityId>> {
        let distinct: HashSet<EntityId> = requested.iter().copied().collect();
        if requested.len() != KEYWORD_COUNT || distinct.len() != KEYWORD_COUNT {
            return Err(DomainError::InvalidKeywordCount {
                expected: KEYWORD_COUNT,
            }
            .into());
        }

        for id in requested {
            if !self.ctx.board_repo().category_exists(*id).await? {
                return Err(DomainError::ValidationError(format!("unknown category {id}")).into());
            }
        }

        Ok(requested.to_vec())
    }

    /// Boards the user currently likes
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn liked_boards(&self, user_id: EntityId) -> ServiceResult<Vec<BoardSummaryResponse>> {
        self.require_user(user_id).await?;
        let boards = self.ctx.board_repo().liked_by_user(user_id).await?;
        Ok(boards.iter().map(BoardSummaryResponse::from).collect())
    }

    /// Boards written by the user
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn authored_boards(
        &self,
        user_id: EntityId,
    ) -> ServiceResult<Vec<BoardSummaryResponse>> {
        self.require_user(user_id).await?;
        let boards = self.ctx.board_repo().by_author(user_id).await?;
        Ok(boards.iter().map(BoardSummaryResponse::from).collect())
    }
}
