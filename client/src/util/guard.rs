//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated redirect behavior.
//! The guard holds no state of its own; it reads the session signal and
//! performs no I/O beyond the navigation trigger.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// True when the guard should redirect: hydration finished and no
/// authenticated identity is present.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded without an
/// authenticated identity. Re-runs on every session change.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Renders `children` only while an authenticated identity is present;
/// otherwise renders nothing and triggers the login redirect.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = leptos_router::hooks::use_navigate();
    install_unauth_redirect(session, navigate);

    view! {
        <Show when=move || session.get().is_authenticated()>
            {children()}
        </Show>
    }
}
