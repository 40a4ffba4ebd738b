//! Catalog service
//!
//! Read-only listings: home feed, categories, tags, search and author
//! profiles. Only published posts are ever listed.

use blog_core::{Post, Snowflake};
use tracing::instrument;

use crate::dto::mappers::post_list;
use crate::dto::{
    AuthorProfileResponse, AuthorResponse, CategoryPageResponse, CategoryResponse,
    HomeFeedResponse, PaginatedResponse, PostResponse, SearchResponse, TagPageResponse,
    TagResponse, TopCategoryResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Featured posts on the home page
const FEATURED_LIMIT: i64 = 5;
/// Categories shown in the navigation
const TOP_CATEGORIES_LIMIT: i64 = 4;
/// Most viewed posts fetched for a category page (featured + popular)
const POPULAR_LIMIT: i64 = 6;
const MAX_SEARCH_QUERY_LENGTH: usize = 100;
const SEARCH_RESULTS_LIMIT: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 50;

pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Featured posts split for the page layout, plus the latest posts
    #[instrument(skip(self))]
    pub async fn home_feed(
        &self,
        limit: i64,
        before: Option<Snowflake>,
    ) -> ServiceResult<HomeFeedResponse> {
        let featured = self.ctx.post_repo().find_featured(FEATURED_LIMIT).await?;
        let limit = clamp_limit(limit);
        let latest = self
            .ctx
            .post_repo()
            .find_published(limit + 1, before)
            .await?;

        // A single featured post fills both slots
        let first = featured.first().map(PostResponse::from);
        let second = featured.get(1).or(featured.first()).map(PostResponse::from);
        let rest = featured.get(2..).map(post_list).unwrap_or_default();

        Ok(HomeFeedResponse {
            first,
            second,
            rest,
            posts: paginate(latest, limit),
        })
    }

    /// Categories with posts, most posts first
    #[instrument(skip(self))]
    pub async fn top_categories(&self) -> ServiceResult<Vec<TopCategoryResponse>> {
        let top = self
            .ctx
            .category_repo()
            .find_top(TOP_CATEGORIES_LIMIT)
            .await?;
        Ok(top.iter().map(TopCategoryResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn category_page(
        &self,
        slug: &str,
        limit: i64,
        before: Option<Snowflake>,
    ) -> ServiceResult<CategoryPageResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", slug))?;

        let limit = clamp_limit(limit);
        let posts = self
            .ctx
            .post_repo()
            .find_published_by_category(category.id, limit + 1, before)
            .await?;
        let popular = self
            .ctx
            .post_repo()
            .find_popular_by_category(category.id, POPULAR_LIMIT)
            .await?;

        Ok(CategoryPageResponse {
            category: CategoryResponse::from(&category),
            posts: paginate(posts, limit),
            featured: popular.first().map(PostResponse::from),
            popular: popular.get(1..).map(post_list).unwrap_or_default(),
        })
    }

    #[instrument(skip(self))]
    pub async fn tag_page(&self, tag_id: Snowflake) -> ServiceResult<TagPageResponse> {
        let tag = self
            .ctx
            .tag_repo()
            .find_by_id(tag_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tag", tag_id.to_string()))?;

        let posts = self.ctx.post_repo().find_published_by_tag(tag.id).await?;

        Ok(TagPageResponse {
            tag: TagResponse::from(&tag),
            tag_count: posts.len(),
            posts: post_list(&posts),
        })
    }

    /// Case-insensitive search. Overlong queries match nothing.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<SearchResponse> {
        let query = query.trim();
        let posts = if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
            Vec::new()
        } else {
            self.ctx
                .post_repo()
                .search_published(query, SEARCH_RESULTS_LIMIT)
                .await?
        };

        Ok(SearchResponse {
            query: query.to_string(),
            posts: post_list(&posts),
        })
    }

    #[instrument(skip(self))]
    pub async fn author_profile(&self, username: &str) -> ServiceResult<AuthorProfileResponse> {
        let author = self
            .ctx
            .author_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Author", username))?;

        let posts = self
            .ctx
            .post_repo()
            .find_published_by_author(author.id)
            .await?;
        let total_views = self
            .ctx
            .post_repo()
            .total_visits_by_author(author.id)
            .await?;

        Ok(AuthorProfileResponse {
            author: AuthorResponse::from(&author),
            posts: post_list(&posts),
            total_views,
        })
    }
}

fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// `posts` holds up to `limit + 1` rows; the extra row only signals another page
fn paginate(mut posts: Vec<Post>, limit: i64) -> PaginatedResponse<PostResponse> {
    let has_more = posts.len() as i64 > limit;
    posts.truncate(limit as usize);
    let next_before = if has_more {
        posts.last().map(|p| p.id.to_string())
    } else {
        None
    };
    PaginatedResponse::new(post_list(&posts), next_before, has_more, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::Fixture;
    use blog_core::traits::TagRepository;
    use blog_core::{Author, PostStatus, Tag};

    async fn post_in(
        fx: &Fixture,
        author: &Author,
        category: Option<Snowflake>,
        featured: bool,
        visits: i64,
    ) -> Post {
        let mut post = fx.published(author).await;
        post.category_id = category;
        post.featured = featured;
        post.visit_count = visits;
        fx.store.update_post(&post);
        post
    }

    #[tokio::test]
    async fn test_home_feed_single_featured_fills_both_slots() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        let featured = post_in(&fx, &writer, None, true, 0).await;
        post_in(&fx, &writer, None, false, 0).await;

        let feed = CatalogService::new(&fx.ctx).home_feed(10, None).await.unwrap();
        let id = featured.id.to_string();
        assert_eq!(feed.first.unwrap().id, id);
        assert_eq!(feed.second.unwrap().id, id);
        assert!(feed.rest.is_empty());
        assert_eq!(feed.posts.data.len(), 2);
        assert!(!feed.posts.pagination.has_more);
    }

    #[tokio::test]
    async fn test_home_feed_pagination() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        for _ in 0..5 {
            fx.published(&writer).await;
        }
        fx.post(&writer, PostStatus::Draft, true).await;
        let service = CatalogService::new(&fx.ctx);

        let page = service.home_feed(3, None).await.unwrap().posts;
        assert_eq!(page.data.len(), 3);
        assert!(page.pagination.has_more);

        let cursor = page.pagination.next_before.unwrap().parse().unwrap();
        let page = service.home_feed(3, Some(cursor)).await.unwrap().posts;
        assert_eq!(page.data.len(), 2);
        assert!(!page.pagination.has_more);
        assert!(page.pagination.next_before.is_none());
    }

    #[tokio::test]
    async fn test_category_page_popularity() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        let category = fx.category("Rust", "rust").await;
        let mut by_visits = Vec::new();
        for visits in [5, 50, 1, 20] {
            by_visits.push(post_in(&fx, &writer, Some(category.id), false, visits).await);
        }
        post_in(&fx, &writer, None, false, 999).await;

        let page = CatalogService::new(&fx.ctx)
            .category_page("rust", 3, None)
            .await
            .unwrap();

        assert_eq!(page.category.slug, "rust");
        assert_eq!(page.posts.data.len(), 3);
        assert!(page.posts.pagination.has_more);
        assert_eq!(page.featured.unwrap().visit_count, 50);
        let popular: Vec<i64> = page.popular.iter().map(|p| p.visit_count).collect();
        assert_eq!(popular, vec![20, 5, 1]);
    }

    #[tokio::test]
    async fn test_unknown_category_and_tag() {
        let fx = Fixture::new();
        let service = CatalogService::new(&fx.ctx);

        let err = service.category_page("nope", 3, None).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        let err = service.tag_page(Snowflake::new(1)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_top_categories_skip_empty() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        let busy = fx.category("Busy", "busy").await;
        let quiet = fx.category("Quiet", "quiet").await;
        fx.category("Empty", "empty").await;
        for _ in 0..3 {
            post_in(&fx, &writer, Some(busy.id), false, 0).await;
        }
        post_in(&fx, &writer, Some(quiet.id), false, 0).await;

        let top = CatalogService::new(&fx.ctx).top_categories().await.unwrap();
        let slugs: Vec<&str> = top.iter().map(|c| c.category.slug.as_str()).collect();
        assert_eq!(slugs, vec!["busy", "quiet"]);
        assert_eq!(top[0].post_count, 3);
    }

    #[tokio::test]
    async fn test_tag_page_counts_published_posts() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        let tag = Tag::new(fx.next_id(), "async".to_string());
        fx.store.create(&tag).await.unwrap();
        let tagged = fx.published(&writer).await;
        let draft = fx.post(&writer, PostStatus::Draft, false).await;
        fx.store.attach(tagged.id, tag.id).await.unwrap();
        fx.store.attach(draft.id, tag.id).await.unwrap();

        let page = CatalogService::new(&fx.ctx).tag_page(tag.id).await.unwrap();
        assert_eq!(page.tag.name, "async");
        assert_eq!(page.tag_count, 1);
        assert_eq!(page.posts[0].id, tagged.id.to_string());
    }

    #[tokio::test]
    async fn test_search() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        let category = fx.category("Databases", "databases").await;
        let mut titled = fx.published(&writer).await;
        titled.title = "Ownership in Rust".to_string();
        fx.store.update_post(&titled);
        post_in(&fx, &writer, Some(category.id), false, 0).await;
        let mut hidden = fx.post(&writer, PostStatus::Draft, true).await;
        hidden.title = "Rust drafts".to_string();
        fx.store.update_post(&hidden);
        let service = CatalogService::new(&fx.ctx);

        let found = service.search("  rust ").await.unwrap();
        assert_eq!(found.query, "rust");
        assert_eq!(found.posts.len(), 1);

        let found = service.search("DATABASE").await.unwrap();
        assert_eq!(found.posts.len(), 1);

        let found = service.search(&"a".repeat(101)).await.unwrap();
        assert!(found.posts.is_empty());
    }

    #[tokio::test]
    async fn test_author_profile_totals() {
        let fx = Fixture::new();
        let (_, writer) = fx.author("writer").await;
        post_in(&fx, &writer, None, false, 10).await;
        post_in(&fx, &writer, None, false, 5).await;
        let mut draft = fx.post(&writer, PostStatus::Draft, false).await;
        draft.visit_count = 100;
        fx.store.update_post(&draft);
        let service = CatalogService::new(&fx.ctx);

        let profile = service.author_profile("writer").await.unwrap();
        assert_eq!(profile.author.username, "writer");
        assert_eq!(profile.posts.len(), 2);
        assert_eq!(profile.total_views, 15);

        let (_, quiet) = fx.author("quiet").await;
        let profile = service.author_profile(&quiet.username).await.unwrap();
        assert_eq!(profile.total_views, 0);

        assert_eq!(
            service.author_profile("ghost").await.unwrap_err().status_code(),
            404
        );
    }
}
