//! Dashboard page shown to signed-in users.
//!
//! Sits behind the auth guard: unauthenticated visitors are redirected to
//! `/login` and nothing below renders for them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::RequireAuth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let greeting = {
        let session = session.clone();
        move || {
            let state = session.state.get();
            state.user.map(|u| u.name).unwrap_or_default()
        }
    };
    let role_label = {
        let session = session.clone();
        move || match session.state.get().role() {
            Some(crate::net::types::Role::Provider) => "provider",
            _ => "seeker",
        }
    };
    let known = session.known_identities();

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", greeting())}</h1>
                <span class="dashboard-page__role">{role_label}</span>
                <button class="btn" on:click=on_logout>
                    "Log Out"
                </button>
            </header>

            <section class="dashboard-page__known">
                <h2>"Profiles on this device"</h2>
                <ul>
                    {known
                        .into_iter()
                        .map(|u| view! { <li>{u.name}" — "{u.email}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
