//! # client
//!
//! Leptos + WASM frontend for the skillmatch marketplace. Holds the
//! browser-side profile store, the session context, the auth guard, static
//! demo fixtures, and the login/dashboard pages.

pub mod app;
pub mod components;
pub mod fixtures;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
