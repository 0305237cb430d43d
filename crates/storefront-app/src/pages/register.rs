//! The registration page.
//!
//! Validation happens in the directory (mismatch, weak password,
//! duplicate email, in that order); a successful registration logs the
//! new user straight in.

use crate::context::use_session;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::time::Duration;
use storefront_session::SIMULATED_LATENCY_MS;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    // Already logged in: skip the form entirely.
    {
        let session = session.clone();
        let navigate = use_navigate();
        Effect::new(move |_| {
            if session.state.get().authenticated {
                navigate("/", Default::default());
            }
        });
    }

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
                let result = session.register(
                    name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                    &confirm.get_untracked(),
                );
                pending.set(false);
                match result {
                    Ok(_) => navigate("/", Default::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
            Duration::from_millis(SIMULATED_LATENCY_MS),
        );
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Register"</h1>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}

                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />

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

                <label for="confirm">"Confirm password"</label>
                <input
                    id="confirm"
                    type="password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />

                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Register" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
