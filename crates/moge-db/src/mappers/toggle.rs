//! Reaction, follow, listing and certification mappers

use moge_core::entities::{EmailCertification, Follow, FollowUser, Reaction};
use moge_core::value_objects::{EntityId, ReactionKey, ReactionSubject};
use tracing::warn;

use crate::models::{CertificationModel, FollowModel, FollowUserModel, ReactionModel};

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        let subject = ReactionSubject::parse(&model.subject_type).unwrap_or_else(|| {
            warn!(
                subject_type = %model.subject_type,
                subject_id = model.subject_id,
                "Unknown reaction subject in stored row, reading it as a board like"
            );
            ReactionSubject::Board
        });
        Reaction {
            key: ReactionKey::new(
                subject,
                EntityId::new(model.subject_id),
                EntityId::new(model.user_id),
            ),
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            follower_id: EntityId::new(model.follower_id),
            following_id: EntityId::new(model.following_id),
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<FollowUserModel> for FollowUser {
    fn from(model: FollowUserModel) -> Self {
        FollowUser {
            user_id: EntityId::new(model.user_id),
            nickname: model.nickname,
            profile_image: model.profile_image,
        }
    }
}

impl From<CertificationModel> for EmailCertification {
    fn from(model: CertificationModel) -> Self {
        EmailCertification {
            email: model.email,
            code: model.code,
            issued_at: model.issued_at,
        }
    }
}
