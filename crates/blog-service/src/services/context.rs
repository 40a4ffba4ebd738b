//! Service context - dependency container for services
//!
//! Holds the repository ports, the anonymous session store, and the shared
//! JWT service and id generator.

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::traits::{
    AuthorRepository, CategoryRepository, CommentRepository, FirstViewRepository, PostRepository,
    ReactionRepository, SessionViewStore, SubscriptionRepository, TagRepository, UserRepository,
    ViewCounterRepository,
};
use blog_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Content repositories (posts, authors, categories, tags, comments)
/// - Engagement stores (first views, session views, daily counters, reactions)
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Content
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    tag_repo: Arc<dyn TagRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,

    // Engagement
    first_view_repo: Arc<dyn FirstViewRepository>,
    session_view_store: Arc<dyn SessionViewStore>,
    view_counter_repo: Arc<dyn ViewCounterRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        first_view_repo: Arc<dyn FirstViewRepository>,
        session_view_store: Arc<dyn SessionViewStore>,
        view_counter_repo: Arc<dyn ViewCounterRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            post_repo,
            user_repo,
            author_repo,
            category_repo,
            tag_repo,
            comment_repo,
            subscription_repo,
            first_view_repo,
            session_view_store,
            view_counter_repo,
            reaction_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Content ===

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn author_repo(&self) -> &dyn AuthorRepository {
        self.author_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn subscription_repo(&self) -> &dyn SubscriptionRepository {
        self.subscription_repo.as_ref()
    }

    // === Engagement ===

    /// Durable first-view records for signed-in users
    pub fn first_view_repo(&self) -> &dyn FirstViewRepository {
        self.first_view_repo.as_ref()
    }

    /// Seen-post sets for anonymous sessions
    pub fn session_view_store(&self) -> &dyn SessionViewStore {
        self.session_view_store.as_ref()
    }

    pub fn view_counter_repo(&self) -> &dyn ViewCounterRepository {
        self.view_counter_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_view_store", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    author_repo: Option<Arc<dyn AuthorRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    subscription_repo: Option<Arc<dyn SubscriptionRepository>>,
    first_view_repo: Option<Arc<dyn FirstViewRepository>>,
    session_view_store: Option<Arc<dyn SessionViewStore>>,
    view_counter_repo: Option<Arc<dyn ViewCounterRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn author_repo(mut self, repo: Arc<dyn AuthorRepository>) -> Self {
        self.author_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn subscription_repo(mut self, repo: Arc<dyn SubscriptionRepository>) -> Self {
        self.subscription_repo = Some(repo);
        self
    }

    pub fn first_view_repo(mut self, repo: Arc<dyn FirstViewRepository>) -> Self {
        self.first_view_repo = Some(repo);
        self
    }

    pub fn session_view_store(mut self, store: Arc<dyn SessionViewStore>) -> Self {
        self.session_view_store = Some(store);
        self
    }

    pub fn view_counter_repo(mut self, repo: Arc<dyn ViewCounterRepository>) -> Self {
        self.view_counter_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            required(self.post_repo, "post_repo")?,
            required(self.user_repo, "user_repo")?,
            required(self.author_repo, "author_repo")?,
            required(self.category_repo, "category_repo")?,
            required(self.tag_repo, "tag_repo")?,
            required(self.comment_repo, "comment_repo")?,
            required(self.subscription_repo, "subscription_repo")?,
            required(self.first_view_repo, "first_view_repo")?,
            required(self.session_view_store, "session_view_store")?,
            required(self.view_counter_repo, "view_counter_repo")?,
            required(self.reaction_repo, "reaction_repo")?,
            required(self.jwt_service, "jwt_service")?,
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}
