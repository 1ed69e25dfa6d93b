use crate::Tag;

/// A tag-invalidated cache. Entries are keyed individually but evicted in
/// bulk through the tags they were registered under at `put` time.
///
/// Methods take `&self`: implementations are expected to use interior
/// mutability so a registry can serve concurrent readers and invalidators.
pub trait Cache {
    type Key;
    type Value;

    fn get(&self, key: &Self::Key) -> Option<Self::Value>;
    fn put(&self, key: Self::Key, value: Self::Value, tags: Vec<Box<dyn Tag>>);
    fn invalidate(&self, tag: &dyn Tag);
}
