//! Post model -> entity mapper

use blog_core::entities::{Post, PostStatus};
use blog_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            category_id: model.category_id.map(Snowflake::new),
            title: model.title,
            detail: model.detail,
            status: PostStatus::parse(&model.status),
            visible: model.visible,
            featured: model.featured,
            visit_count: model.visit_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
