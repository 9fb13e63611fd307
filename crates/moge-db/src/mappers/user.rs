//! User entity <-> model mapper

use moge_core::entities::{Category, NewUser, User};
use moge_core::value_objects::EntityId;

use crate::models::{CategoryModel, UserModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: EntityId::new(model.id),
            email: model.email,
            nickname: model.nickname,
            profile_image: model.profile_image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: EntityId::new(model.id),
            name: model.name,
        }
    }
}

/// Values for inserting a user row
pub struct UserInsert<'a> {
    pub email: &'a str,
    pub nickname: &'a str,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            email: user.email.trim(),
            nickname: user.nickname.trim(),
            password_hash: &user.password_hash,
        }
    }
}
