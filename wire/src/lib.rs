//! Shared request/response model for the profile API.
//!
//! This crate owns the JSON shapes exchanged between `client` and `server`
//! for profile creation, so the two sides cannot drift apart on field names
//! or on the conflict message the client matches against.


use serde::{Deserialize, Serialize};

/// User type applied when a signup request omits `user_type`.
pub const DEFAULT_USER_TYPE: &str = "customer";

/// Conflict message returned when a profile row already exists for a subject.
pub const PROFILE_EXISTS_MESSAGE: &str = "Profile already exists";

/// Body of `POST /api/profiles`.
///
/// `email` is intentionally absent: the server takes it from the identity
/// provider, never from the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    /// Display name for the new profile.
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional role hint; defaults to [`DEFAULT_USER_TYPE`] when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

impl CreateProfileRequest {
    /// The effective user type, falling back to [`DEFAULT_USER_TYPE`].
    #[must_use]
    pub fn user_type_or_default(&self) -> &str {
        self.user_type.as_deref().unwrap_or(DEFAULT_USER_TYPE)
    }
}

/// A profile row as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity-provider subject id (primary key).
    pub id: String,
    /// Email taken from the identity provider at creation time.
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub user_type: String,
    /// Creation timestamp, formatted by the server (`YYYY-MM-DD HH24:MI:SS`).
    pub created_at: String,
}

/// Success body of `POST /api/profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    pub message: String,
    pub profile: Profile,
}

/// Generic failure body: `{ "error": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Conflict failure body: `{ "message": "Profile already exists" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictBody {
    pub message: String,
}
