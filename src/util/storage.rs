//! Durable key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only talks to [`SessionStorage`]. Browser builds use
//! `window.localStorage`; tests and non-browser builds inject
//! [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result`; callers decide whether a failure matters.
//! The session store logs and swallows them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend (outside the browser, or disabled by the user).
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// Quota exceeded or write rejected.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key/value store.
pub trait SessionStorage {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage. Clones share the same entries, so a fresh store built
/// from a clone sees what an earlier store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
    disabled: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every call, like a browser with storage disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self { entries: Arc::default(), disabled: true }
    }

    /// Direct read that bypasses the `disabled` flag. Test helper.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn with_entries<R>(
        &self,
        op: impl FnOnce(&mut BTreeMap<String, String>) -> R,
        on_poison: fn(String) -> StorageError,
    ) -> Result<R, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        let mut guard = self.entries.lock().map_err(|e| on_poison(e.to_string()))?;
        Ok(op(&mut guard))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|map| map.get(key).cloned(), StorageError::Read)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_entries(
            |map| {
                map.insert(key.to_owned(), value.to_owned());
            },
            StorageError::Write,
        )
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(
            |map| {
                map.remove(key);
            },
            StorageError::Write,
        )
    }
}
