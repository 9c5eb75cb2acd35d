//! Login form shown while no session exists

use crate::state::AppState;
use blogdash_client::{BlogApi, LoginForm};
use blogdash_core::UserType;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Email/password form with a guest shortcut
#[component]
pub fn LoginModal() -> impl IntoView {
    let state = AppState::from_context();
    let form = RwSignal::new(LoginForm::new());
    let submitting = move || form.with(LoginForm::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        let api = state.api();
        spawn_local(async move {
            let result = api.login(&credentials).await;
            let Some(token) = form.try_update(|f| f.finish(result)).flatten() else {
                return;
            };

            let Some(mut current) = form.try_get_untracked() else {
                return;
            };
            state.session.try_update(|session| {
                current.complete(session, &token, UserType::User);
            });
            form.try_set(current);
        });
    };

    let on_guest = move |_: leptos::ev::MouseEvent| {
        let mut current = form.get_untracked();
        state.session.update(|session| {
            current.guest(session);
        });
        form.try_set(current);
    };

    view! {
        <div class="login-overlay">
            <form class="login-modal" on:submit=on_submit>
                <h2>"Welcome to BlogDash"</h2>
                <p class="login-subtitle">"Sign in to manage your posts"</p>

                {move || {
                    form.with(LoginForm::error_message)
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="admin@example.com"
                    disabled=submitting
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />

                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    disabled=submitting
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />

                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() { "Signing in..." } else { "Sign In" }}
                </button>
                <button type="button" class="btn btn-secondary" disabled=submitting on:click=on_guest>
                    "Continue as Guest"
                </button>
            </form>
        </div>
    }
}
