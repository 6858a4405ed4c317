//! Client-side key-value storage for session tokens
//!
//! The session layer never touches a concrete backend. It is handed a
//! [`TokenStore`] and only ever reads or writes string values under the
//! [`ACCESS_KEY`] and [`REFRESH_KEY`] keys, so the same logic runs against
//! browser `localStorage`, a JSON file on disk, or an in-memory map in tests.

mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod browser;

pub use memory::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

use crate::error::StorageResult;

/// Storage key holding the access token
pub const ACCESS_KEY: &str = "access";

/// Storage key holding the refresh token
pub const REFRESH_KEY: &str = "refresh";

/// Persistent string key-value store shared by everything in the same origin
pub trait TokenStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Write several entries as one update
    ///
    /// Backends that can persist a batch in a single write override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Write `entries` one key at a time through `store`
///
/// If any write fails, every key written so far is put back to its previous
/// value (or removed with `remove` if it had none) and the first error is
/// returned.
#[cfg(any(target_arch = "wasm32", test))]
pub(crate) fn set_each_or_restore<S, R>(
    store: &S,
    entries: &[(&str, &str)],
    remove: R,
) -> StorageResult<()>
where
    S: TokenStore + ?Sized,
    R: Fn(&str) -> StorageResult<()>,
{
    let previous = entries
        .iter()
        .map(|(key, _)| store.get(key).map(|value| (*key, value)))
        .collect::<StorageResult<Vec<_>>>()?;

    for (written, (key, value)) in entries.iter().enumerate() {
        if let Err(e) = store.set(key, value) {
            for (key, value) in previous.iter().take(written).rev() {
                let restored = match value {
                    Some(value) => store.set(key, value),
                    None => remove(key),
                };
                if let Err(restore_err) = restored {
                    tracing::warn!(key, error = %restore_err, "Could not restore token");
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

impl<T: TokenStore + ?Sized> TokenStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        (**self).set_many(entries)
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        (**self).set_many(entries)
    }
}
