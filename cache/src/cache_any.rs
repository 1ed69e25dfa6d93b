use std::any::Any;

use crate::{Cache, Tag};

/// Object-safe adapter so [`CacheRegistry`](crate::CacheRegistry) can hold
/// caches of arbitrary key/value types behind one trait object.
pub trait CacheAny {
    fn get_any(&self, key: &dyn Any) -> Option<Box<dyn Any>>;
    fn put_any(&self, key: Box<dyn Any>, value: Box<dyn Any>, tags: Vec<Box<dyn Tag>>);
    fn invalidate_any(&self, tag: &dyn Tag);
}

impl<C> CacheAny for C
where
    C: Cache,
    C::Key: 'static,
    C::Value: 'static,
{
    fn get_any(&self, key: &dyn Any) -> Option<Box<dyn Any>> {
        let key = key.downcast_ref::<C::Key>().or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "failed to downcast_ref key to {}",
                std::any::type_name::<C::Key>()
            );

            None
        })?;

        self.get(key).map(|v| Box::new(v) as Box<dyn Any>)
    }

    fn put_any(&self, key: Box<dyn Any>, value: Box<dyn Any>, tags: Vec<Box<dyn Tag>>) {
        let key = key.downcast::<C::Key>().inspect_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::debug!("failed to downcast key to {}", std::any::type_name::<C::Key>());
        });

        let value = value.downcast::<C::Value>().inspect_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "failed to downcast value to {}",
                std::any::type_name::<C::Value>()
            );
        });

        if let (Ok(key), Ok(value)) = (key, value) {
            self.put(*key, *value, tags);
        }
    }

    fn invalidate_any(&self, tag: &dyn Tag) {
        self.invalidate(tag);
    }
}
