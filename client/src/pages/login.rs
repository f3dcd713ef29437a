//! Login page: demo-account sign-in plus provider signup completion.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::steps::HowItWorks;
use crate::fixtures;
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_demo_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }

        match fixtures::find_demo_user(&email_value, &password_value) {
            Some(identity) => {
                session.save_user_data(identity);
                navigate("/", NavigateOptions::default());
            }
            None => info.set("No demo account matches those credentials.".to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Skillmatch"</h1>
                <p class="login-card__subtitle">"Demo Account"</p>
                <form class="login-form" on:submit=on_demo_login>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <ProviderSignup/>
            </div>
            <HowItWorks/>
        </div>
    }
}

/// Completes signup after an external identity-provider sign-in: takes the
/// provider access token and the profile fields, then creates the backend
/// profile row exactly once.
#[component]
fn ProviderSignup() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token_value = token.get().trim().to_owned();
        let full_name_value = full_name.get().trim().to_owned();
        let phone_value = phone.get().trim().to_owned();
        if token_value.is_empty() || full_name_value.is_empty() || phone_value.is_empty() {
            message.set("Enter the access token, full name, and phone.".to_owned());
            return;
        }
        busy.set(true);
        message.set("Creating profile...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let req = wire::CreateProfileRequest {
                full_name: full_name_value,
                phone: phone_value,
                user_type: None,
            };
            match crate::net::api::create_profile(&token_value, &req).await {
                Ok(profile) => message.set(format!("Profile created for {}.", profile.email)),
                Err(e) => message.set(format!("Profile creation failed: {e}")),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_value, full_name_value, phone_value);
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-input"
                type="text"
                placeholder="provider access token"
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="text"
                placeholder="full name"
                prop:value=move || full_name.get()
                on:input=move |ev| full_name.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="tel"
                placeholder="phone"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <button class="login-button" type="submit" disabled=move || busy.get()>
                "Complete Provider Signup"
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="login-message">{move || message.get()}</p>
            </Show>
        </form>
    }
}
