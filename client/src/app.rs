//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::Session;
use crate::store::profile_store::ProfileStore;

/// Root application component.
///
/// Owns the single [`Session`] for the tab and provides it (and its reactive
/// state signal) to every child subtree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(ProfileStore::browser());
    provide_context(session.clone());
    provide_context(session.state);

    // Adopt the stored identity once the app is live in the browser.
    {
        let session = session.clone();
        Effect::new(move || session.hydrate());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/skillmatch.css"/>
        <Title text="Skillmatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
