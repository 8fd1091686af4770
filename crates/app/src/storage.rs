//! In-process storage shared by the in-memory repositories.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store could not complete the operation.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A keyed table living for the lifetime of the process.
#[derive(Debug)]
pub(crate) struct MemoryTable<K, V> {
    rows: RwLock<FxHashMap<K, V>>,
}

impl<K, V> Default for MemoryTable<K, V> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<K, V> MemoryTable<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(crate) async fn get(&self, key: &K) -> Option<V> {
        self.rows.read().await.get(key).cloned()
    }

    pub(crate) async fn put(&self, key: K, value: V) {
        self.rows.write().await.insert(key, value);
    }

    pub(crate) async fn values(&self) -> Vec<V> {
        self.rows.read().await.values().cloned().collect()
    }
}
