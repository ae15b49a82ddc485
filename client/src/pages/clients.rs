//! Client list with registration badge and booking count.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_banner::ErrorBanner;
use crate::net::gateway::Gateway;
use crate::net::types::Client;
use crate::state::fetch::FetchState;

pub const DELETE_CLIENT_PROMPT: &str = "Are you sure you want to delete this client?";

/// Badge class for a client's booking count; highlighted once any exist.
pub fn booking_count_class(count: usize) -> &'static str {
    if count > 0 { "count count--active" } else { "count" }
}

pub(crate) fn load_clients(gateway: Gateway, state: RwSignal<FetchState<Vec<Client>>>) {
    state.update(FetchState::begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_clients(&gateway).await;
        state.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let clients = RwSignal::new(FetchState::<Vec<Client>>::default());
    let action_error = RwSignal::new(None::<String>);

    let gateway_load = gateway.clone();
    Effect::new(move || load_clients(gateway_load.clone(), clients));

    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm(DELETE_CLIENT_PROMPT) {
            return;
        }
        action_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_client(&gateway, id).await {
                    Ok(()) => load_clients(gateway, clients),
                    Err(e) => action_error.set(Some(format!("Failed to delete client: {e}"))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, id);
        }
    });

    let banner = Signal::derive(move || action_error.get().or_else(|| clients.get().error));

    view! {
        <section class="clients-page">
            <div class="page-header">
                <h1>"Clients"</h1>
                <a href="/clients/new" class="btn btn--primary">"Add Client"</a>
            </div>
            <ErrorBanner message=banner />
            {move || {
                let state = clients.get();
                if state.loading && state.value.is_none() {
                    return view! { <p class="page-loading">"Loading clients..."</p> }.into_any();
                }
                let rows = state.value.unwrap_or_default();
                if rows.is_empty() {
                    return view! { <p class="page-empty">"No clients found."</p> }.into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Bookings"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|client| view! { <ClientRow client=client on_delete=on_delete /> })
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
fn ClientRow(client: Client, on_delete: Callback<i64>) -> impl IntoView {
    let id = client.id;
    let name = client.full_name();
    let bookings = client.bookings.len();
    view! {
        <tr>
            <td>
                {name}
                {client.is_registered.then(|| view! { <span class="badge">"Registered"</span> })}
            </td>
            <td>{client.email}</td>
            <td>{client.phone.unwrap_or_else(|| "-".to_owned())}</td>
            <td>
                <span class={booking_count_class(bookings)}>{bookings}</span>
            </td>
            <td class="data-table__actions">
                <a href=format!("/clients/{id}") class="btn btn--small">"Edit"</a>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
