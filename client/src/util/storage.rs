//! Durable key-value storage used for session and preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and dark-mode toggle persist through `KeyValueStore` so
//! they never touch `web-sys` directly. `BrowserStorage` is the hydrate-only
//! `localStorage` backend; `MemoryStore` backs tests and any environment where
//! the browser store is missing.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser `BrowserStorage` reports `Unavailable` instead of
//! pretending to succeed, so callers exercise the same degrade path they
//! would hit when a user disables storage.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be reached or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`, resolved on every call.
///
/// Holding no `web_sys::Storage` handle keeps this type `Send + Sync`, which
/// Leptos requires for values stored in reactive contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation(format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Operation("memory store poisoned".to_owned()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// Missing keys, backend failures, and undecodable content all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns `StorageError::Operation` if `value` cannot be encoded, or the
/// backend's error if the write fails.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Operation(e.to_string()))?;
    store.set(key, &raw)
}
