//! In-memory repository implementations for service tests

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use blog_common::JwtService;
use blog_core::traits::{
    AuthorRepository, CategoryRepository, CommentRepository, FirstViewRepository, PostRepository,
    ReactionRepository, RepoResult, SessionViewStore, SubscriptionRepository, TagRepository,
    UserRepository, ViewCounterRepository,
};
use blog_core::{
    Author, Category, CategoryPostCount, Comment, DailyViewCounter, DomainError, Post, PostStatus,
    Reaction, ReactionChange, ReactionKind, Snowflake, SnowflakeGenerator, Tag, User, UserRole,
};
use chrono::NaiveDate;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: HashMap<Snowflake, User>,
    authors: Vec<Author>,
    posts: HashMap<Snowflake, Post>,
    categories: Vec<Category>,
    tags: HashMap<Snowflake, Tag>,
    post_tags: HashSet<(Snowflake, Snowflake)>,
    first_views: HashSet<(Snowflake, Snowflake)>,
    session_views: HashMap<String, HashSet<Snowflake>>,
    daily: HashMap<(Snowflake, NaiveDate), i64>,
    reactions: HashMap<(Snowflake, Snowflake), Reaction>,
    comments: Vec<Comment>,
    signups: HashSet<String>,
    counter_failures: usize,
}

impl State {
    fn increment_counters(&mut self, post_id: Snowflake, date: NaiveDate) -> RepoResult<()> {
        if self.counter_failures > 0 {
            self.counter_failures -= 1;
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        let post = self
            .posts
            .get_mut(&post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;
        post.visit_count += 1;
        *self.daily.entry((post_id, date)).or_insert(0) += 1;
        Ok(())
    }
}

/// One store backing every repository port
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn published_sorted(&self, filter: impl Fn(&Post) -> bool) -> Vec<Post> {
        let state = self.lock();
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.is_published() && filter(p))
            .cloned()
            .collect();
        posts.sort_by_key(|p| Reverse(p.id));
        posts
    }

    pub fn visit_count(&self, post_id: Snowflake) -> i64 {
        self.lock().posts[&post_id].visit_count
    }

    pub fn daily_views(&self, post_id: Snowflake, date: NaiveDate) -> Option<i64> {
        self.lock().daily.get(&(post_id, date)).copied()
    }

    pub fn set_daily_views(&self, post_id: Snowflake, date: NaiveDate, views: i64) {
        self.lock().daily.insert((post_id, date), views);
    }

    pub fn reaction_count(&self, post_id: Snowflake) -> usize {
        self.lock()
            .reactions
            .keys()
            .filter(|(p, _)| *p == post_id)
            .count()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.lock().comments.clone()
    }

    pub fn approve_comment(&self, comment_id: Snowflake) {
        if let Some(c) = self.lock().comments.iter_mut().find(|c| c.id == comment_id) {
            c.is_approved = true;
        }
    }

    /// Make the next `n` counter writes fail with a database error
    pub fn fail_counter_writes(&self, n: usize) {
        self.lock().counter_failures = n;
    }

    pub fn update_post(&self, post: &Post) {
        self.lock().posts.insert(post.id, post.clone());
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.lock().posts.get(&id).cloned())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.lock().posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn find_published(
        &self,
        limit: i64,
        before: Option<Snowflake>,
    ) -> RepoResult<Vec<Post>> {
        let mut posts = self.published_sorted(|p| before.map_or(true, |b| p.id < b));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Post>> {
        let mut posts = self.published_sorted(|p| p.featured);
        posts.sort_by_key(|p| (p.category_id.is_none(), p.category_id, Reverse(p.created_at)));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_related(
        &self,
        author_id: Snowflake,
        exclude_post_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let mut posts = self.published_sorted(|p| p.author_id == author_id && p.id != exclude_post_id);
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_published_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
        before: Option<Snowflake>,
    ) -> RepoResult<Vec<Post>> {
        let mut posts = self.published_sorted(|p| {
            p.category_id == Some(category_id) && before.map_or(true, |b| p.id < b)
        });
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_popular_by_category(
        &self,
        category_id: Snowflake,
        limit: i64,
    ) -> RepoResult<Vec<Post>> {
        let mut posts = self.published_sorted(|p| p.category_id == Some(category_id));
        posts.sort_by_key(|p| Reverse(p.visit_count));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_published_by_tag(&self, tag_id: Snowflake) -> RepoResult<Vec<Post>> {
        let tagged: HashSet<Snowflake> = self
            .lock()
            .post_tags
            .iter()
            .filter(|(_, t)| *t == tag_id)
            .map(|(p, _)| *p)
            .collect();
        Ok(self.published_sorted(|p| tagged.contains(&p.id)))
    }

    async fn find_published_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Post>> {
        Ok(self.published_sorted(|p| p.author_id == author_id))
    }

    async fn search_published(&self, query: &str, limit: i64) -> RepoResult<Vec<Post>> {
        let needle = query.to_lowercase();
        let category_names: HashMap<Snowflake, String> = self
            .lock()
            .categories
            .iter()
            .map(|c| (c.id, c.name.to_lowercase()))
            .collect();
        let mut posts = self.published_sorted(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.detail.to_lowercase().contains(&needle)
                || p
                    .category_id
                    .and_then(|id| category_names.get(&id))
                    .is_some_and(|name| name.contains(&needle))
        });
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn total_visits_by_author(&self, author_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .published_sorted(|p| p.author_id == author_id)
            .iter()
            .map(|p| p.visit_count)
            .sum())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.lock().users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for MemoryStore {
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Author>> {
        Ok(self
            .lock()
            .authors
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Author>> {
        Ok(self
            .lock()
            .authors
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create(&self, author: &Author) -> RepoResult<()> {
        self.lock().authors.push(author.clone());
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn find_top(&self, limit: i64) -> RepoResult<Vec<CategoryPostCount>> {
        let state = self.lock();
        let mut counts: Vec<CategoryPostCount> = state
            .categories
            .iter()
            .map(|c| CategoryPostCount {
                category: c.clone(),
                post_count: state
                    .posts
                    .values()
                    .filter(|p| p.category_id == Some(c.id))
                    .count() as i64,
            })
            .filter(|c| c.post_count > 0)
            .collect();
        counts.sort_by_key(|c| Reverse(c.post_count));
        counts.truncate(limit as usize);
        Ok(counts)
    }

    async fn create(&self, category: &Category) -> RepoResult<()> {
        self.lock().categories.push(category.clone());
        Ok(())
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tag>> {
        Ok(self.lock().tags.get(&id).cloned())
    }

    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        self.lock().tags.insert(tag.id, tag.clone());
        Ok(())
    }

    async fn attach(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        self.lock().post_tags.insert((post_id, tag_id));
        Ok(())
    }
}

#[async_trait]
impl FirstViewRepository for MemoryStore {
    async fn claim_and_count(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<bool> {
        let mut state = self.lock();
        if state.first_views.contains(&(post_id, user_id)) {
            return Ok(false);
        }
        state.increment_counters(post_id, date)?;
        state.first_views.insert((post_id, user_id));
        Ok(true)
    }
}

#[async_trait]
impl SessionViewStore for MemoryStore {
    async fn mark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .lock()
            .session_views
            .entry(session_id.to_string())
            .or_default()
            .insert(post_id))
    }

    async fn unmark_seen(&self, session_id: &str, post_id: Snowflake) -> RepoResult<()> {
        if let Some(seen) = self.lock().session_views.get_mut(session_id) {
            seen.remove(&post_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ViewCounterRepository for MemoryStore {
    async fn record_first_view(&self, post_id: Snowflake, date: NaiveDate) -> RepoResult<()> {
        self.lock().increment_counters(post_id, date)
    }

    async fn find_daily_counts(
        &self,
        post_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<DailyViewCounter>> {
        Ok(self
            .lock()
            .daily
            .iter()
            .filter(|((p, d), _)| *p == post_id && *d >= from && *d <= to)
            .map(|((p, d), v)| DailyViewCounter::new(*p, *d, *v))
            .collect())
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        Ok(self.lock().reactions.get(&(post_id, author_id)).cloned())
    }

    async fn toggle(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        requested: &ReactionKind,
    ) -> RepoResult<ReactionChange> {
        let mut state = self.lock();
        let key = (post_id, author_id);
        let change =
            ReactionChange::decide(state.reactions.get(&key).map(|r| &r.kind), requested);
        match change.current_kind() {
            Some(kind) => {
                state
                    .reactions
                    .insert(key, Reaction::new(post_id, author_id, kind.clone()));
            }
            None => {
                state.reactions.remove(&key);
            }
        }
        Ok(change)
    }

    async fn count_likes(&self, post_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .lock()
            .reactions
            .values()
            .filter(|r| r.post_id == post_id && r.kind.counts_as_like())
            .count() as i64)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.lock().comments.push(comment.clone());
        Ok(())
    }

    async fn find_approved_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        Ok(self
            .lock()
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.is_approved)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SubscriptionRepository for MemoryStore {
    async fn subscribe(&self, email: &str) -> RepoResult<bool> {
        Ok(self.lock().signups.insert(email.to_string()))
    }
}

/// Service context wired to a fresh [`MemoryStore`]
pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub ctx: ServiceContext,
    ids: SnowflakeGenerator,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let ctx = ServiceContextBuilder::new()
            .post_repo(store.clone())
            .user_repo(store.clone())
            .author_repo(store.clone())
            .category_repo(store.clone())
            .tag_repo(store.clone())
            .comment_repo(store.clone())
            .subscription_repo(store.clone())
            .first_view_repo(store.clone())
            .session_view_store(store.clone())
            .view_counter_repo(store.clone())
            .reaction_repo(store.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(7)))
            .build()
            .unwrap();

        Self {
            store,
            ctx,
            ids: SnowflakeGenerator::new(8),
        }
    }

    pub fn next_id(&self) -> Snowflake {
        self.ids.generate()
    }

    pub async fn user(&self, username: &str, role: UserRole) -> User {
        let user = User::new(
            self.next_id(),
            username.to_string(),
            format!("{username}@example.com"),
        )
        .with_role(role);
        UserRepository::create(self.store.as_ref(), &user).await.unwrap();
        user
    }

    /// A regular user with an author profile
    pub async fn author(&self, username: &str) -> (User, Author) {
        let user = self.user(username, UserRole::Regular).await;
        let author = Author::new(self.next_id(), user.id, username.to_string());
        AuthorRepository::create(self.store.as_ref(), &author)
            .await
            .unwrap();
        (user, author)
    }

    pub async fn post(&self, author: &Author, status: PostStatus, visible: bool) -> Post {
        let mut post = Post::new(
            self.next_id(),
            author.id,
            "A post".to_string(),
            "Some body text".to_string(),
        );
        post.status = status;
        post.visible = visible;
        PostRepository::create(self.store.as_ref(), &post)
            .await
            .unwrap();
        post
    }

    pub async fn published(&self, author: &Author) -> Post {
        self.post(author, PostStatus::Active, true).await
    }

    pub async fn category(&self, name: &str, slug: &str) -> Category {
        let category = Category::new(self.next_id(), name.to_string(), slug.to_string());
        CategoryRepository::create(self.store.as_ref(), &category)
            .await
            .unwrap();
        category
    }
}
