mod cache;
mod cache_any;
mod cache_registry;
mod dashcache;
mod tag;

pub use cache::Cache;
pub use cache_registry::CacheRegistry;
pub use dashcache::DashCache;
pub use tag::Tag;
