//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use moge_common::AccessToken;
use moge_core::{Board, BoardSummary, Category, Comment, EntityId, FollowUser, Quiz, UserProfile};

use super::responses::{
    AuthResponse, BoardResponse, BoardSummaryResponse, CategoryResponse, CommentResponse,
    FollowUserResponse, QuizResponse, UserProfileResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<&UserProfile> for UserProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user.id,
            email: profile.user.email.clone(),
            nickname: profile.user.nickname.clone(),
            profile_image: profile.user.profile_image.clone(),
            follower_count: profile.follower_count,
            following_count: profile.following_count,
            keywords: profile.keywords.iter().map(CategoryResponse::from).collect(),
            created_at: profile.user.created_at,
        }
    }
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self::from(&profile)
    }
}

impl From<&FollowUser> for FollowUserResponse {
    fn from(user: &FollowUser) -> Self {
        Self {
            user_id: user.user_id,
            nickname: user.nickname.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

/// Token issued to a user, paired with its owner
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub user_id: EntityId,
    pub token: AccessToken,
}

impl From<IssuedToken> for AuthResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            user_id: issued.user_id,
            jwt: issued.token.token,
            token_type: issued.token.token_type,
            expires_in: issued.token.expires_in,
        }
    }
}

// ============================================================================
// Board Mappers
// ============================================================================

/// Board with its current like total
#[derive(Debug, Clone)]
pub struct BoardWithLikes {
    pub board: Board,
    pub like_count: i64,
}

impl From<&BoardWithLikes> for BoardResponse {
    fn from(b: &BoardWithLikes) -> Self {
        Self {
            id: b.board.id,
            author_id: b.board.author_id,
            category_id: b.board.category_id,
            title: b.board.title.clone(),
            view_count: b.board.view_count,
            like_count: b.like_count,
            created_at: b.board.created_at,
        }
    }
}

impl From<BoardWithLikes> for BoardResponse {
    fn from(b: BoardWithLikes) -> Self {
        Self::from(&b)
    }
}

impl From<&BoardSummary> for BoardSummaryResponse {
    fn from(summary: &BoardSummary) -> Self {
        Self {
            board_id: summary.board_id,
            title: summary.title.clone(),
            category_name: summary.category_name.clone(),
            quiz_count: summary.quiz_count,
            view_count: summary.view_count,
            like_count: summary.like_count,
        }
    }
}

impl From<&Quiz> for QuizResponse {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            board_id: quiz.board_id,
            question: quiz.question.clone(),
            quiz_type: quiz.quiz_type,
            created_at: quiz.created_at,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            board_id: comment.board_id,
            author_id: comment.author_id,
            content: comment.visible_content().to_string(),
            group_id: comment.group_id,
            kind: comment.kind,
            parent_id: comment.parent_id,
            status: comment.status,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
