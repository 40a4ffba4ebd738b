//! Session-scoped state for anonymous readers

mod view_store;

pub use view_store::RedisSessionViewStore;
