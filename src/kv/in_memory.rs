//! InMemoryKv - HashMap-backed key-value store for tests and single-node development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KvBackend, KvError};

/// In-memory key-value store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryKv {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKv {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, KvError> {
        Ok(self.storage.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, KvError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> KvError {
    KvError::Backend("lock poisoned".into())
}

impl KvBackend for InMemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let storage = self.storage.read().map_err(poisoned)?;
        Ok(storage.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), KvError> {
        let mut storage = self.storage.write().map_err(poisoned)?;
        storage.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut storage = self.storage.write().map_err(poisoned)?;
        storage.remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let storage = self.storage.read().map_err(poisoned)?;
        Ok(storage
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
