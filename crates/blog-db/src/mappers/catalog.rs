//! Category and tag model -> entity mappers

use blog_core::entities::{Category, CategoryPostCount, Tag};
use blog_core::value_objects::Snowflake;

use crate::models::{CategoryModel, CategoryPostCountModel, TagModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category::new(Snowflake::new(model.id), model.name, model.slug)
    }
}

impl From<CategoryPostCountModel> for CategoryPostCount {
    fn from(model: CategoryPostCountModel) -> Self {
        CategoryPostCount {
            category: Category::new(Snowflake::new(model.id), model.name, model.slug),
            post_count: model.post_count,
        }
    }
}

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag::new(Snowflake::new(model.id), model.name)
    }
}
