//! Identity-provider client — bearer resolution to a subject.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in itself happens between the browser and the external identity
//! provider; this server only ever sees the resulting access token. Profile
//! creation resolves that token back to a subject id and email before
//! touching the database.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Deserialize;

/// Identity-provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub base_url: String,
}

impl IdentityConfig {
    /// Load from `IDENTITY_PROVIDER_URL`. Returns `None` if missing
    /// (profile creation will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("IDENTITY_PROVIDER_URL").ok()?;
        Some(Self { base_url: normalize_base_url(&base_url) })
    }

    /// Endpoint returning the subject for a bearer token.
    #[must_use]
    pub fn user_endpoint(&self) -> String {
        format!("{}/user", self.base_url)
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// The authenticated principal behind a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub id: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected the token (expired, revoked, malformed).
    #[error("not authenticated")]
    InvalidToken,
    /// The provider was unreachable or answered with garbage.
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Resolve a bearer token to its subject.
///
/// # Errors
///
/// [`IdentityError::InvalidToken`] when the provider rejects the token,
/// [`IdentityError::Provider`] on transport or decode failure.
pub async fn resolve_bearer(config: &IdentityConfig, token: &str) -> Result<Subject, IdentityError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(config.user_endpoint())
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| IdentityError::Provider(e.to_string()))?;

    if resp.status() == reqwest::StatusCode::UNAUTHORIZED || resp.status() == reqwest::StatusCode::FORBIDDEN {
        return Err(IdentityError::InvalidToken);
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(IdentityError::Provider(format!("{status}: {body}")));
    }

    let subject = resp
        .json::<Subject>()
        .await
        .map_err(|e| IdentityError::Provider(e.to_string()))?;
    if subject.id.is_empty() {
        return Err(IdentityError::InvalidToken);
    }
    Ok(subject)
}
