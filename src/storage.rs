use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keyed in-memory store shared between request handlers.
///
/// Entries live for the whole process; there is no eviction. Cloning the
/// store yields another handle onto the same entries, so the composition
/// root can hand one out per service.
pub struct EntityStore<K, V> {
    entities: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for EntityStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
        }
    }
}

impl<K, V> EntityStore<K, V> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> Default for EntityStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> EntityStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Insert or overwrite the value stored under `key`.
    pub async fn insert(&self, key: K, value: V) {
        let mut entities = self.entities.write().await;
        entities.insert(key, value);
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let entities = self.entities.read().await;
        entities.get(key).cloned()
    }

    /// Snapshot of all stored values, in no particular order.
    pub async fn list(&self) -> Vec<V> {
        let entities = self.entities.read().await;
        entities.values().cloned().collect()
    }

    /// Return the value under `key`, inserting the one built by `create` if
    /// the key is vacant. Lookup and insert happen under a single write
    /// acquisition, so racing callers all observe the same winner.
    pub async fn get_or_insert_with<F>(&self, key: K, create: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut entities = self.entities.write().await;
        entities.entry(key).or_insert_with(create).clone()
    }
}
