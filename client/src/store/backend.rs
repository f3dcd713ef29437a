//! Key-value storage backends for the profile store.
//!
//! DESIGN
//! ======
//! The store talks to storage through [`StorageBackend`] so the same
//! persistence logic runs against browser `localStorage` in the app and an
//! in-memory map in native tests. Backend failures are reported as `false` /
//! `None`; callers decide whether to log.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Synchronous string key-value storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value for `key`, `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`. Returns `false` when the write was refused
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> bool;
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Outside the `hydrate` build (native tests, any
/// non-browser context) every operation is a no-op reporting absence.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return false;
            };
            storage.set_item(key, value).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            false
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for tests. Single-threaded, like the browser store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently has a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.map.lock().unwrap().contains_key(key)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map.lock().unwrap().insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&self, key: &str) {
        self.map.lock().unwrap().remove(key);
    }
}
