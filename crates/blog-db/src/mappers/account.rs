//! User and author model -> entity mappers

use blog_core::entities::{Author, User};
use blog_core::value_objects::{Snowflake, UserRole};

use crate::models::{AuthorModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            role: UserRole::parse(&model.role),
            created_at: model.created_at,
        }
    }
}

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Author {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            username: model.username,
            bio: model.bio,
            created_at: model.created_at,
        }
    }
}
