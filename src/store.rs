use std::hash::Hash;

use dashmap::DashMap;

/// Concurrent key-value storage shared by every request handler.
///
/// Each call is atomic on its own. There is no read-modify-write primitive:
/// callers that `load`, change the value and `store` it back can lose an
/// update to another request doing the same thing on the same key.
pub trait Store<K, V>: Send + Sync {
    /// Returns a copy of the value stored under `key`.
    fn load(&self, key: &K) -> Option<V>;

    /// Inserts or overwrites the value under `key`. Last writer wins.
    fn store(&self, key: K, value: V);

    /// Removes `key` if present.
    fn delete(&self, key: &K);
}

/// In-process [`Store`] backed by a sharded map. Nothing is evicted or expired.
pub struct MemoryStore<K, V> {
    map: DashMap<K, V>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Store<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn load(&self, key: &K) -> Option<V> {
        self.map.get(key).map(|entry| entry.value().clone())
    }

    fn store(&self, key: K, value: V) {
        self.map.insert(key, value);
    }

    fn delete(&self, key: &K) {
        self.map.remove(key);
    }
}
