//! Authentication Screens
//!
//! Login and registration forms against the stubbed identity provider.
//! Provider errors render inline below the fields; the registration form
//! checks the password confirmation locally before anything is submitted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use smartlease_core::auth::{Role, DEMO_EMAIL, DEMO_PASSWORD};

use crate::services::use_auth;
use crate::store::{store_set_session, use_app_store};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Container toggling between the login and registration forms
#[component]
pub fn AuthScreen() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::Login);

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-brand">
                    <h1>"SmartLease"</h1>
                    <p class="auth-tagline">"Property management for landlords"</p>
                </div>
                {move || match mode.get() {
                    AuthMode::Login => {
                        view! {
                            <LoginForm on_register=move |_| set_mode.set(AuthMode::Register) />
                        }
                            .into_any()
                    }
                    AuthMode::Register => {
                        view! {
                            <RegisterForm on_login=move |_| set_mode.set(AuthMode::Login) />
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(#[prop(into)] on_register: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);
        let auth = auth.clone();
        spawn_local(async move {
            let result = auth
                .sign_in(&email.get_untracked(), &password.get_untracked())
                .await;
            match result {
                Ok(session) => store_set_session(&store, session),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Log In"</h2>
            <label class="field">
                <span>"Email Address"</span>
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Password"</span>
                <input
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Signing in..." } else { "Log In" }}
            </button>
            <p class="auth-switch">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_register.run(())>
                    "Sign Up"
                </button>
            </p>
            <p class="auth-hint">"Demo account: " {DEMO_EMAIL} " / " {DEMO_PASSWORD}</p>
        </form>
    }
}

#[component]
fn RegisterForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::Tenant);
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);

        // Cross-field check happens locally; nothing is submitted on failure
        if password.get_untracked() != confirm.get_untracked() {
            set_error.set(Some("Passwords do not match.".to_string()));
            return;
        }

        set_loading.set(true);
        let auth = auth.clone();
        spawn_local(async move {
            let result = auth
                .sign_up(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                    role.get_untracked(),
                )
                .await;
            match result {
                Ok(session) => store_set_session(&store, session),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Create Account"</h2>
            <label class="field">
                <span>"Full Name"</span>
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Email Address"</span>
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Role"</span>
                <select
                    prop:value=move || role.get().as_str().to_string()
                    on:change=move |ev| set_role.set(Role::from_str(&event_target_value(&ev)))
                >
                    <option value="Tenant">"Tenant"</option>
                    <option value="Property Manager">"Property Manager"</option>
                </select>
            </label>
            <label class="field">
                <span>"Password (min 6 characters)"</span>
                <input
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Confirm Password"</span>
                <input
                    type="password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
            </button>
            <p class="auth-switch">
                "Already have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_login.run(())>
                    "Log In"
                </button>
            </p>
        </form>
    }
}
