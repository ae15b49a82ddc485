//! Login page: email + password against the hotel backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The issued token is handed to `util::auth::complete_login`, which stores
//! the session and picks the landing route. Navigation runs from an effect so
//! the submit handler only touches signals.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::{ErrorBanner, FieldError};
use crate::net::types::LoginRequest;
use crate::util::validation::is_valid_email;

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const SHORT_PASSWORD: &str = "Password must be at least 4 characters";
pub const MIN_PASSWORD_LEN: usize = 4;

/// Per-field validation messages for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check the raw form values and build the request body.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, LoginFieldErrors> {
    let email = email.trim();
    let mut errors = LoginFieldErrors::default();
    if !is_valid_email(email) {
        errors.email = Some(INVALID_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(SHORT_PASSWORD);
    }
    if errors != LoginFieldErrors::default() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let landing = RwSignal::new(None::<&'static str>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = landing.get() {
            navigate(route, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let gateway = expect_context::<crate::net::gateway::Gateway>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(LoginFieldErrors::default());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&gateway, &request).await {
                    Ok(token) => {
                        landing.set(Some(crate::util::auth::complete_login(gateway.session(), &token)));
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(Some(LOGIN_FAILED.to_owned()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hotel Admin"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <ErrorBanner message=error />
                <form class="login-form" on:submit=on_submit>
                    <label class="form-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().email) />
                    <label class="form-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().password) />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
