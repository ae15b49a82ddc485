//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `SessionStore` and the one `Gateway` for the page and
//! provides both as context. Pages never construct their own transport.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::config;
use crate::net::gateway::Gateway;
use crate::net::transport::BrowserTransport;
use crate::pages::client_form::{ClientCreatePage, ClientEditPage};
use crate::pages::clients::ClientsPage;
use crate::pages::home::HomePage;
use crate::pages::hotel_form::{HotelCreatePage, HotelEditPage};
use crate::pages::hotels::HotelsPage;
use crate::pages::login::LoginPage;
use crate::state::session::SessionStore;
use crate::util::persistence::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::restore(Arc::new(BrowserStorage));
    let gateway = Gateway::new(&config::api_base_url(), session.clone(), Arc::new(BrowserTransport));
    provide_context(session);
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/hotel-console.css"/>
        <Title text="Hotel Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("hotels") view=AdminLayout>
                    <Route path=StaticSegment("") view=HotelsPage/>
                    <Route path=StaticSegment("new") view=HotelCreatePage/>
                    <Route path=ParamSegment("hotel_id") view=HotelEditPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("clients") view=AdminLayout>
                    <Route path=StaticSegment("") view=ClientsPage/>
                    <Route path=StaticSegment("new") view=ClientCreatePage/>
                    <Route path=ParamSegment("client_id") view=ClientEditPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
