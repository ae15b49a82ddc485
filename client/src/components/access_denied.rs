//! View shown to authenticated users who lack the administrator role.
//!
//! The session stays as it is unless the user chooses to log out here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::{HOME_ROUTE, LOGIN_ROUTE};

#[component]
pub fn AccessDenied() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        session.logout();
        logged_out.set(true);
    };

    view! {
        <div class="access-denied">
            <div class="access-denied__card">
                <h2>"Access Denied"</h2>
                <p>"You do not have permission to view this page. This area is for administrators only."</p>
                <a href=HOME_ROUTE class="btn btn--primary">"Go to Home Page"</a>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </div>
        </div>
    }
}
