//! Visibility gate

use crate::entities::Post;
use crate::value_objects::Viewer;

/// Published posts are visible to everyone; anything else only to its
/// author and to staff or admins.
///
/// A `false` result must surface as "not found", never as "forbidden".
pub fn can_view(post: &Post, viewer: &Viewer) -> bool {
    post.is_published() || viewer.is_author_of(post) || viewer.is_elevated()
}

/// View and like figures are only shown for published posts
#[inline]
pub fn should_display_engagement(post: &Post) -> bool {
    post.is_published()
}

/// A request counts toward the view ledger when the post is published, the
/// request is not a chart refresh, and the viewer did not write the post.
pub fn should_count_view(post: &Post, viewer: &Viewer, chart_refresh: bool) -> bool {
    !chart_refresh && post.is_published() && !viewer.is_author_of(post)
}
