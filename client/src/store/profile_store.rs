//! Durable browser-side persistence of the current identity and the rolling
//! list of all identities seen on this device.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session context hydrates from and writes through this store. The two
//! localStorage keys survive reloads within the same browser profile; other
//! tabs race with last-write-wins semantics and no lock.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here surfaces an error to the caller. Malformed persisted JSON is
//! treated as absence (the current-identity key self-heals by removal), and
//! refused writes are logged and dropped.

#[cfg(test)]
#[path = "profile_store_test.rs"]
mod profile_store_test;

use std::sync::Arc;

use crate::net::types::Identity;
use crate::store::backend::{BrowserStorage, StorageBackend};

/// localStorage key holding the JSON-encoded current identity.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// localStorage key holding the JSON-encoded array of all known identities.
pub const ALL_USERS_KEY: &str = "allUsers";

/// Handle over a storage backend. Cheap to clone; the session context and
/// pages share one instance.
#[derive(Clone)]
pub struct ProfileStore {
    backend: Arc<dyn StorageBackend>,
}

impl ProfileStore {
    /// Store backed by browser `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::with_backend(Arc::new(BrowserStorage))
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Read the current identity. Malformed content is treated as absent and
    /// the key is removed so the corruption cannot recur.
    #[must_use]
    pub fn load_current(&self) -> Option<Identity> {
        let raw = self.backend.get(CURRENT_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::warn!("discarding malformed {CURRENT_USER_KEY} entry: {e}");
                self.backend.remove(CURRENT_USER_KEY);
                None
            }
        }
    }

    /// Persist `identity` as the current identity. The stored copy always
    /// carries `authenticated = true`; the store has no concept of an
    /// unauthenticated saved identity.
    pub fn save_current(&self, mut identity: Identity) {
        identity.authenticated = true;
        self.write_json(CURRENT_USER_KEY, &identity);
    }

    /// Remove the current identity.
    pub fn clear_current(&self) {
        self.backend.remove(CURRENT_USER_KEY);
    }

    /// Replace-by-id upsert into the all-identities collection. Prior
    /// relative order is preserved; the upserted entry moves to the end.
    pub fn upsert_all(&self, identity: Identity) {
        let mut all = self.list_all();
        all.retain(|existing| existing.id != identity.id);
        all.push(identity);
        self.write_json(ALL_USERS_KEY, &all);
    }

    /// Read the all-identities collection. Absent or malformed content yields
    /// an empty list; malformed content is logged but left in place.
    #[must_use]
    pub fn list_all(&self) -> Vec<Identity> {
        let Some(raw) = self.backend.get(ALL_USERS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(all) => all,
            Err(e) => {
                log::warn!("ignoring malformed {ALL_USERS_KEY} entry: {e}");
                Vec::new()
            }
        }
    }

    fn write_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        let Ok(raw) = serde_json::to_string(value) else {
            log::warn!("failed to serialize {key} entry");
            return;
        };
        if !self.backend.set(key, &raw) {
            log::warn!("storage refused write for {key}");
        }
    }
}
