//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors, since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! profile creation degrades to an on-page message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{CreateProfileRequest, Profile};

/// Endpoint materializing a backend profile row after provider sign-in.
pub const PROFILE_ENDPOINT: &str = "/api/profiles";

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn conflict_or_error_message(status: u16, body: &str) -> String {
    if let Ok(conflict) = serde_json::from_str::<wire::ConflictBody>(body) {
        return conflict.message;
    }
    if let Ok(err) = serde_json::from_str::<wire::ErrorBody>(body) {
        return err.error;
    }
    profile_request_failed_message(status)
}

/// Create the backend profile row for the signed-in subject via
/// `POST /api/profiles`. Called once after identity-provider sign-in
/// completes.
///
/// # Errors
///
/// Returns the server's error or conflict message, or a transport error
/// string.
pub async fn create_profile(access_token: &str, req: &CreateProfileRequest) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PROFILE_ENDPOINT)
            .header("Authorization", &format!("Bearer {access_token}"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(conflict_or_error_message(status, &body));
        }

        let body: wire::CreateProfileResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, req);
        Err("not available off the browser".to_owned())
    }
}
