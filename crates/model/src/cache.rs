//! Table Name Cache - Process-wide memo of resolved table names
//!
//! Keys are type paths, values are table names. Entries are only ever
//! added: once a type's table name has been resolved it stays fixed for the
//! life of the cache.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe type-path -> table-name map
#[derive(Debug, Default)]
pub struct TableNameCache {
    entries: RwLock<HashMap<String, String>>,
}

impl TableNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Insert `name` unless the key is already cached. Returns whether the
    /// entry was inserted.
    pub fn seed(&self, key: &str, name: impl Into<String>) -> bool {
        let mut entries = self.write();
        if entries.contains_key(key) {
            return false;
        }
        entries.insert(key.to_string(), name.into());
        true
    }

    /// Return the cached name for `key`, computing and storing it first if
    /// absent. Lookup and insert happen under one exclusive lock.
    pub fn resolve_with<F>(&self, key: &str, compute: F) -> String
    where
        F: FnOnce() -> String,
    {
        let mut entries = self.write();
        if let Some(name) = entries.get(key) {
            return name.clone();
        }

        let name = compute();
        tracing::debug!("Caching table name '{}' for {}", name, key);
        entries.insert(key.to_string(), name.clone());
        name
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop every entry. Only meant for resetting state between tests.
    pub fn clear(&self) {
        self.write().clear();
    }

    // The map is consistent after every single insert, so a poisoned lock
    // still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
