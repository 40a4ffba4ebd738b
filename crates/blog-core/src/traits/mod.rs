//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuthorRepository, CategoryRepository, CommentRepository, FirstViewRepository, PostRepository,
    ReactionRepository, RepoResult, SessionViewStore, SubscriptionRepository, TagRepository,
    UserRepository, ViewCounterRepository,
};
