//! Browser `localStorage` token store

use super::{TokenStore, set_each_or_restore};
use crate::error::{StorageError, StorageResult};
use web_sys::Storage;

/// Token store backed by `window.localStorage`
///
/// Values are written raw (not JSON encoded) so they stay readable by any
/// other script on the same origin.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// Attach to the current window's local storage
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl TokenStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    /// localStorage has no transactions; a failed write puts earlier keys back
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        set_each_or_restore(self, entries, |key| {
            self.storage
                .remove_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        })
    }
}
