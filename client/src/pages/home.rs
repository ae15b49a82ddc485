//! Public landing page.

use leptos::prelude::*;

use crate::util::auth::{ADMIN_LANDING_ROUTE, LOGIN_ROUTE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Hotel Management System"</h1>
            <p>"Manage hotels, clients and their bookings from one place."</p>
            <div class="home-page__actions">
                <a href=ADMIN_LANDING_ROUTE class="btn btn--primary">"Admin Panel"</a>
                <a href=LOGIN_ROUTE class="btn">"Portal Login"</a>
            </div>
        </div>
    }
}
