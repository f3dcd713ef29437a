//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] is provided via context from the root `App` component.
//! Route guards and user-aware components read the reactive [`SessionState`]
//! signal; pages call the login/logout/save operations, which write through
//! to the profile store so the identity survives reloads.
//!
//! The hydrated identity is trusted as-is until an explicit logout; no
//! network validation of the identity-provider token happens here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Identity, Role};
use crate::store::profile_store::ProfileStore;

/// Reactive view of "who is logged in".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    /// True until [`Session::hydrate`] has run, so guards do not redirect
    /// before the stored identity has been considered.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// True iff a current identity exists and its flag is set.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.authenticated)
    }

    /// Role of the current identity, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Shared session handle: the reactive state plus its backing store.
///
/// All operations are synchronous; mutations are immediately visible to
/// subsequent reads in the same execution context.
#[derive(Clone)]
pub struct Session {
    pub state: RwSignal<SessionState>,
    store: ProfileStore,
}

impl Session {
    #[must_use]
    pub fn new(store: ProfileStore) -> Self {
        Self { state: RwSignal::new(SessionState::default()), store }
    }

    /// Adopt the stored current identity, if any, and finish loading.
    pub fn hydrate(&self) {
        let user = self.store.load_current();
        self.state.set(SessionState { user, loading: false });
    }

    /// Mark `identity` authenticated, adopt it, and persist it as current.
    pub fn login(&self, mut identity: Identity) {
        identity.authenticated = true;
        self.store.save_current(identity.clone());
        self.state.set(SessionState { user: Some(identity), loading: false });
    }

    /// Clear the in-memory identity and the persisted current identity.
    pub fn logout(&self) {
        self.store.clear_current();
        self.state.set(SessionState { user: None, loading: false });
    }

    /// Like [`Session::login`], but also upserts the identity into the
    /// all-identities collection so it is discoverable via `list_all`.
    pub fn save_user_data(&self, mut identity: Identity) {
        identity.authenticated = true;
        self.store.save_current(identity.clone());
        self.store.upsert_all(identity.clone());
        self.state.set(SessionState { user: Some(identity), loading: false });
    }

    /// Identities previously saved on this device.
    #[must_use]
    pub fn known_identities(&self) -> Vec<Identity> {
        self.store.list_all()
    }
}
