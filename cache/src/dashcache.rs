use std::hash::Hash;

use dashmap::DashMap;

use crate::{Cache, Tag};

/// Tag-versioned cache over [`DashMap`].
///
/// Invalidation never touches entries. Each tag id maps to a version counter;
/// `put` snapshots the current version of every tag it registers under, and
/// `get` only returns an entry while all of its snapshots still match the
/// live counters. `invalidate` bumps a counter, which is idempotent with
/// respect to entry validity and commutes with concurrent invalidations, so
/// no locking beyond the maps themselves is needed.
///
/// Stale entries are dropped lazily, on the `get` that discovers them.
pub struct DashCache<K, V> {
    entries: DashMap<K, Entry<V>>,
    versions: DashMap<String, u64>,
}

struct Entry<V> {
    value: V,
    // (tag id, tag version observed at insertion)
    snapshots: Vec<(String, u64)>,
}

impl<K, V> DashCache<K, V>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            versions: DashMap::new(),
        }
    }

    fn version(&self, tag_id: &str) -> u64 {
        self.versions.get(tag_id).map(|v| *v).unwrap_or(0)
    }
}

impl<K, V> Default for DashCache<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache for DashCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn get(&self, key: &Self::Key) -> Option<Self::Value> {
        {
            let entry = self.entries.get(key)?;
            if entry
                .snapshots
                .iter()
                .all(|(tag_id, seen)| *seen == self.version(tag_id))
            {
                return Some(entry.value.clone());
            }
        }

        // stale: some tag was bumped since insertion
        self.entries.remove(key);
        None
    }

    fn put(&self, key: Self::Key, value: Self::Value, tags: Vec<Box<dyn Tag>>) {
        let snapshots = tags
            .iter()
            .map(|tag| (tag.id().to_string(), self.version(tag.id())))
            .collect();

        self.entries.insert(key, Entry { value, snapshots });
    }

    fn invalidate(&self, tag: &dyn Tag) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?tag, "invalidate");

        *self.versions.entry(tag.id().to_string()).or_insert(0) += 1;
    }
}
