//! Daily view, reaction and comment model -> entity mappers

use blog_core::entities::{Comment, DailyViewCounter, Reaction, ReactionKind};
use blog_core::value_objects::Snowflake;

use crate::models::{CommentModel, DailyViewModel, ReactionModel};

impl From<DailyViewModel> for DailyViewCounter {
    fn from(model: DailyViewModel) -> Self {
        DailyViewCounter::new(Snowflake::new(model.post_id), model.view_date, model.views)
    }
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            post_id: Snowflake::new(model.post_id),
            author_id: Snowflake::new(model.author_id),
            // Stored tags were validated on the way in
            kind: ReactionKind::from_tag(&model.reaction),
            created_at: model.created_at,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            body: model.body,
            is_approved: model.is_approved,
            created_at: model.created_at,
        }
    }
}
