//! Page-level failure banner and inline field error.

use leptos::prelude::*;

/// Alert banner shown while `message` holds an error.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <div class="error-banner" role="alert">{text}</div> })
    }
}

/// Validation message rendered under a form input.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}
