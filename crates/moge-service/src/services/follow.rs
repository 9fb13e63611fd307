//! Follow service
//!
//! Follows share the toggle state machine with likes: the first call follows,
//! the next unfollows, the one after re-follows.

use moge_core::{DomainError, EntityId};
use tracing::{info, instrument};

use crate::dto::{FollowPageResponse, FollowUserResponse, ToggleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Which side of the follow relation to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Followings,
    Followers,
}

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow, unfollow, or re-follow `following_id`
    #[instrument(skip(self), fields(follower_id = %follower_id, following_id = %following_id))]
    pub async fn toggle_follow(
        &self,
        follower_id: EntityId,
        following_id: EntityId,
    ) -> ServiceResult<ToggleResponse> {
        if follower_id == following_id {
            return Err(DomainError::CannotFollowSelf.into());
        }

        let action = self
            .ctx
            .follow_repo()
            .toggle(follower_id, following_id)
            .await?;

        info!(action = %action, "Follow toggled");
        Ok(ToggleResponse::new(following_id, follower_id, action))
    }

    /// Users followed by `user_id`, 1-based page
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn followings(&self, user_id: EntityId, page: i64) -> ServiceResult<FollowPageResponse> {
        self.page(user_id, page, Direction::Followings).await
    }

    /// Users following `user_id`, 1-based page
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn followers(&self, user_id: EntityId, page: i64) -> ServiceResult<FollowPageResponse> {
        self.page(user_id, page, Direction::Followers).await
    }

    async fn page(
        &self,
        user_id: EntityId,
        page: i64,
        direction: Direction,
    ) -> ServiceResult<FollowPageResponse> {
        if page <= 0 {
            return Err(DomainError::InvalidPage.into());
        }
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id).into());
        }

        let page_size = self.ctx.settings().follow_page_size;
        let offset = (page - 1).saturating_mul(page_size);
        let repo = self.ctx.follow_repo();
        let users = match direction {
            Direction::Followings => repo.followings(user_id, page_size, offset).await?,
            Direction::Followers => repo.followers(user_id, page_size, offset).await?,
        };

        Ok(FollowPageResponse {
            page,
            page_size,
            users: users.iter().map(FollowUserResponse::from).collect(),
        })
    }
}
