//! Category and tag entities - how posts are grouped

use crate::value_objects::Snowflake;

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: Snowflake, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }
}

/// Category with the number of posts filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPostCount {
    pub category: Category,
    pub post_count: i64,
}

/// Tag entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Snowflake,
    pub name: String,
}

impl Tag {
    pub fn new(id: Snowflake, name: String) -> Self {
        Self { id, name }
    }
}
