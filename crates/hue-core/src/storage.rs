#![forbid(unsafe_code)]

//! Key-value persistence seam.
//!
//! The browser host backs this with `localStorage`; tests and hosts without
//! durable storage use [`MemoryStore`].

use std::collections::HashMap;

use crate::error::StorageError;

/// A string key-value store that may be unavailable at any time.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), Ok(None));
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Ok(Some("dark".to_string())));
    }

    #[test]
    fn with_entry_seeds_store() {
        let store = MemoryStore::new().with_entry("theme", "light");
        assert_eq!(store.get("theme"), Ok(Some("light".to_string())));
        assert_eq!(store.get("other"), Ok(None));
    }
}
