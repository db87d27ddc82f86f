//! User model -> entity mapper

use review_core::entities::{TeamMember, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.user_id,
            username: model.username,
            team_name: model.team_name,
            is_active: model.is_active,
        }
    }
}

impl From<UserModel> for TeamMember {
    fn from(model: UserModel) -> Self {
        TeamMember {
            user_id: model.user_id,
            username: model.username,
            is_active: model.is_active,
        }
    }
}
