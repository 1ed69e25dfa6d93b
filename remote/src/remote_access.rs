use std::sync::Arc;

use cache::{Cache, CacheRegistry, Tag};

use crate::{Transport, TransportError};

/// Read-through, tag-invalidated access to the remote API.
///
/// Reads consult the per-namespace cache first and register the broadest
/// applicable tag set when they miss; writes run the mutation and then
/// invalidate every tag the affected resource could have been read under, so
/// the next read refetches. There are no automatic retries at this layer.
pub struct RemoteAccess<T> {
    transport: T,
    cache_registry: Arc<CacheRegistry>,
}

impl<T> RemoteAccess<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache_registry: Arc::new(CacheRegistry::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn read<'t, K, V, Fut, C>(
        &'t self,
        fetch: impl FnOnce(&'t T) -> Fut,
        namespace: &'static str,
        key: K,
        tagger: impl FnOnce(&V) -> Vec<Box<dyn Tag>>,
        cache_init: impl FnOnce() -> C,
    ) -> Result<V, TransportError>
    where
        K: 'static,
        V: Clone + 'static,
        Fut: Future<Output = Result<V, TransportError>>,
        C: Cache<Key = K, Value = V> + Send + Sync + 'static,
    {
        self.cache_registry.ensure_cache(namespace, cache_init);
        match self.cache_registry.get::<K, V>(namespace, &key) {
            Some(value) => {
                tracing::debug!(namespace, "cache hit");
                Ok(value)
            }
            None => {
                let value = fetch(&self.transport).await?;
                self.cache_registry
                    .put(namespace, key, value.clone(), tagger(&value));
                Ok(value)
            }
        }
    }

    pub async fn write<'t, V, Fut>(
        &'t self,
        mutate: impl FnOnce(&'t T) -> Fut,
        tagger: impl FnOnce(&V) -> Vec<Box<dyn Tag>>,
    ) -> Result<V, TransportError>
    where
        Fut: Future<Output = Result<V, TransportError>>,
    {
        let value = mutate(&self.transport).await?;
        for tag in tagger(&value) {
            self.cache_registry.invalidate(tag.as_ref());
        }
        Ok(value)
    }
}

impl<T> Clone for RemoteAccess<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            cache_registry: Arc::clone(&self.cache_registry),
        }
    }
}
