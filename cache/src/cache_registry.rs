use std::any::Any;

use dashmap::DashMap;

use crate::{Cache, Tag, cache_any::CacheAny};

/// One cache per namespace, all reachable for broadcast invalidation.
///
/// Namespaces are registered lazily by the first reader (`ensure_cache`), so
/// an invalidation for a tag nobody has read under yet is a no-op — which is
/// exactly right, there is nothing to go stale.
pub struct CacheRegistry {
    caches: DashMap<&'static str, Box<dyn CacheAny + Send + Sync>>,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self {
            caches: DashMap::new(),
        }
    }

    pub fn ensure_cache<C>(&self, namespace: &'static str, cache_init: impl FnOnce() -> C)
    where
        C: Cache + Send + Sync + 'static,
        C::Key: 'static,
        C::Value: 'static,
    {
        if let dashmap::Entry::Vacant(entry) = self.caches.entry(namespace) {
            entry.insert(Box::new(cache_init()));
        }
    }

    pub fn get<K, V>(&self, namespace: &'static str, key: &K) -> Option<V>
    where
        K: 'static,
        V: 'static,
    {
        self.caches
            .get(namespace)?
            .get_any(key as &dyn Any)?
            .downcast::<V>()
            .ok()
            .map(|v| *v)
    }

    pub fn put<K, V>(&self, namespace: &str, key: K, value: V, tags: Vec<Box<dyn Tag>>) -> bool
    where
        K: 'static,
        V: 'static,
    {
        match self.caches.get(namespace) {
            Some(cache) => {
                cache.put_any(Box::new(key), Box::new(value), tags);
                true
            }
            None => false,
        }
    }

    /// Invalidate `tag` in every namespace. Reads under other tags are
    /// untouched.
    pub fn invalidate(&self, tag: &dyn Tag) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?tag, "invalidate across namespaces");

        for cache in self.caches.iter() {
            cache.invalidate_any(tag);
        }
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}
