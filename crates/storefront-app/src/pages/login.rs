//! The login page.
//!
//! Credential checks run against the in-memory directory behind a
//! deliberate delay so the pending state is visible. A `callbackUrl`
//! query parameter carries the path to resume after login.

use crate::context::use_session;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use std::time::Duration;
use storefront_session::SIMULATED_LATENCY_MS;

/// Where to go after authentication: the callback target when one was
/// carried in the URL, the home page otherwise.
fn post_auth_target(callback: Option<String>) -> String {
    match callback {
        Some(url) if !url.is_empty() && url != "/" => url,
        _ => "/".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let target = move || post_auth_target(query.get_untracked().get("callbackUrl"));

    // Already logged in: skip the form entirely.
    {
        let session = session.clone();
        let navigate = use_navigate();
        Effect::new(move |_| {
            if session.state.get().authenticated {
                navigate(&target(), Default::default());
            }
        });
    }

    let hint = session.hint();
    let submit_session = session.clone();
    let submit_navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let session = submit_session.clone();
        let navigate = submit_navigate.clone();
        set_timeout(
            move || {
                let result = session.login(
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                );
                pending.set(false);
                match result {
                    Ok(_) => navigate(&target(), Default::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
            Duration::from_millis(SIMULATED_LATENCY_MS),
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="auth-hint">"Demo credentials: " {hint}</p>
                <p class="auth-switch">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
