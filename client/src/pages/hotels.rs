//! Hotel list with links to the create/edit forms and inline delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `AdminLayout`, so the session is already known to carry the
//! administrator role. Every request goes through the shared `Gateway`.
//!
//! ERROR HANDLING
//! ==============
//! Load and delete failures land in the page banner; a 401 has already logged
//! the user out by the time the error arrives here.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_banner::ErrorBanner;
use crate::components::star_rating::StarRating;
use crate::net::gateway::Gateway;
use crate::net::types::Hotel;
use crate::state::fetch::FetchState;

pub const DELETE_HOTEL_PROMPT: &str = "Are you sure you want to delete this hotel?";

/// Fetch the hotel list into `state`.
pub(crate) fn load_hotels(gateway: Gateway, state: RwSignal<FetchState<Vec<Hotel>>>) {
    state.update(FetchState::begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_hotels(&gateway).await;
        state.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
    }
}

#[component]
pub fn HotelsPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let hotels = RwSignal::new(FetchState::<Vec<Hotel>>::default());
    let action_error = RwSignal::new(None::<String>);

    let gateway_load = gateway.clone();
    Effect::new(move || load_hotels(gateway_load.clone(), hotels));

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm(DELETE_HOTEL_PROMPT) {
            return;
        }
        action_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_hotel(&gateway, id).await {
                    Ok(()) => load_hotels(gateway, hotels),
                    Err(e) => action_error.set(Some(format!("Failed to delete hotel: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, id);
        }
    });

    let banner = Signal::derive(move || action_error.get().or_else(|| hotels.get().error));

    view! {
        <section class="hotels-page">
            <div class="page-header">
                <h1>"Hotels"</h1>
                <a href="/hotels/new" class="btn btn--primary">"Add Hotel"</a>
            </div>
            <ErrorBanner message=banner />
            {move || {
                let state = hotels.get();
                if state.loading && state.value.is_none() {
                    return view! { <p class="page-loading">"Loading hotels..."</p> }.into_any();
                }
                let rows = state.value.unwrap_or_default();
                if rows.is_empty() {
                    return view! { <p class="page-empty">"No hotels yet."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Location"</th>
                                <th>"Stars"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|hotel| view! { <HotelRow hotel=hotel on_delete=on_delete /> })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn HotelRow(hotel: Hotel, on_delete: Callback<i64>) -> impl IntoView {
    let id = hotel.id;
    view! {
        <tr>
            <td>{hotel.name}</td>
            <td>{hotel.location}</td>
            <td><StarRating stars=hotel.stars /></td>
            <td class="data-table__actions">
                <a href=format!("/hotels/{id}") class="btn btn--small">"Edit"</a>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
