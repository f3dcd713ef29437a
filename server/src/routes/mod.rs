//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API is called cross-origin from the marketplace frontend, so every
//! route sits behind a permissive CORS layer; the layer also answers
//! preflight OPTIONS requests with an empty success.

pub mod profiles;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// All HTTP routes with shared state and CORS applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/profiles", post(profiles::create_profile))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
