//! Client-side identity model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store, the session context, and the pages all share this
//! shape. It mirrors what the marketplace knows about a signed-in person on
//! this device; the backend profile row is a separate representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace role of an identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Someone looking for a service.
    Seeker,
    /// Someone offering a service.
    Provider,
}

/// A user or provider profile record as tracked by the browser-side store.
///
/// `authenticated` is forced to `true` by the store on every save; stored
/// blobs written before the flag existed parse with `false` via the serde
/// default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique id within the all-identities collection.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
    /// Free-form skills summary; only meaningful for providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default)]
    pub authenticated: bool,
}
