#![forbid(unsafe_code)]

//! `localStorage`-backed [`KeyValueStore`].

use hue_core::{KeyValueStore, StorageError};
use web_sys::{Storage, Window};

use crate::js_error_message;

/// Wraps `window.localStorage`, which may be missing or throw on access
/// (private browsing, disabled cookies, sandboxed iframes).
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!(error = %js_error_message(&err), "localStorage access denied");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(js_error_message(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                message: js_error_message(&err),
            })
    }
}
