//! Guarded chrome around the administrator screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent route view for `/hotels/*` and `/clients/*`. Anonymous visitors are
//! sent to `/login`, non-administrators get the access-denied view, and
//! administrators see the nested page between the header and footer.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::access_denied::AccessDenied;
use crate::config::ADMIN_ROLE;
use crate::state::session::SessionStore;
use crate::util::auth::{LOGIN_ROUTE, RouteAccess, install_route_guard};

#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let access = install_route_guard(session.clone(), Some(ADMIN_ROLE), navigate.clone());

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

    move || match access.get() {
        RouteAccess::Granted => {
            let on_logout = on_logout.clone();
            view! {
                <div class="admin-layout">
                    <header class="admin-layout__header">
                        <a href="/hotels" class="admin-layout__brand">"Admin Panel"</a>
                        <nav class="admin-layout__nav">
                            <a href="/hotels">"Hotels"</a>
                            <a href="/clients">"Clients"</a>
                        </nav>
                        <span class="admin-layout__role">"Administrator"</span>
                        <button class="btn admin-layout__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </header>
                    <main class="admin-layout__main">
                        <Outlet/>
                    </main>
                    <footer class="admin-layout__footer">"Hotel Management System"</footer>
                </div>
            }
            .into_any()
        }
        RouteAccess::Denied => view! { <AccessDenied/> }.into_any(),
        RouteAccess::Pending | RouteAccess::Redirect => {
            view! { <p class="admin-layout__pending">"Checking access..."</p> }.into_any()
        }
    }
}
