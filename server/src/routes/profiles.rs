//! Profile routes — post-signin profile creation.
//!
//! Per invocation: authenticate the bearer token, parse the body, check for
//! an existing row, insert, respond. Every terminal state is JSON with a
//! status code; the router's CORS layer stamps permissive headers on all of
//! them, preflights included.

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use wire::{CreateProfileRequest, CreateProfileResponse, PROFILE_EXISTS_MESSAGE};

use crate::services::{identity, profile};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Terminal failure states of profile creation.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// No identity provider configured; the endpoint is disabled.
    #[error("profile creation not configured")]
    Unconfigured,
    /// Missing or rejected bearer credential.
    #[error("not authenticated")]
    Unauthenticated,
    /// The request body was not valid JSON for the expected shape.
    #[error("invalid request body: {0}")]
    Payload(String),
    /// A row already exists for this subject.
    #[error("{PROFILE_EXISTS_MESSAGE}")]
    AlreadyExists,
    /// The identity provider failed out-of-band.
    #[error("{0}")]
    Provider(String),
    /// The store rejected the read or insert (including a raced duplicate).
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl From<identity::IdentityError> for ProfileError {
    fn from(err: identity::IdentityError) -> Self {
        match err {
            identity::IdentityError::InvalidToken => Self::Unauthenticated,
            identity::IdentityError::Provider(detail) => Self::Provider(detail),
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Unconfigured => {
                (StatusCode::SERVICE_UNAVAILABLE, serde_json::json!({ "error": self.to_string() }))
            }
            Self::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, serde_json::json!({ "error": self.to_string() }))
            }
            Self::AlreadyExists => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "message": PROFILE_EXISTS_MESSAGE }))
            }
            Self::Payload(_) | Self::Provider(_) | Self::Db(_) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": self.to_string() }))
            }
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/profiles` — create the profile row for the authenticated
/// subject, refusing duplicates.
pub async fn create_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<Json<CreateProfileResponse>, ProfileError> {
    let Some(config) = &state.identity else {
        return Err(ProfileError::Unconfigured);
    };

    // Resolve the bearer token to a subject before looking at the body, so
    // unauthenticated callers always see the 401 path.
    let token = bearer_token(&headers).ok_or(ProfileError::Unauthenticated)?;
    let subject = identity::resolve_bearer(config, token).await.map_err(|e| {
        tracing::error!(error = %e, "bearer resolution failed");
        ProfileError::from(e)
    })?;

    let Json(req) = body.map_err(|e| ProfileError::Payload(e.to_string()))?;

    // Friendlier error for the common duplicate case; the primary key is
    // the actual guarantee.
    if profile::find_profile(&state.pool, &subject.id).await?.is_some() {
        return Err(ProfileError::AlreadyExists);
    }

    let new = profile::NewProfile::new(&subject, &req);
    let created = profile::insert_profile(&state.pool, &new).await.map_err(|e| {
        tracing::error!(error = %e, subject = %subject.id, "profile insert failed");
        ProfileError::from(e)
    })?;

    tracing::info!(subject = %created.id, user_type = %created.user_type, "profile created");
    Ok(Json(CreateProfileResponse { message: "Profile created".to_owned(), profile: created }))
}
