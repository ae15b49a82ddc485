//! Create and edit screens for a client, plus the client's bookings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form exposes names, email and phone. Middle name and registration flag
//! are carried over from the loaded record on edit and default to `""` and
//! `true` on create, matching what the backend expects in its snake_case body.

#[cfg(test)]
#[path = "client_form_test.rs"]
mod client_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::{ErrorBanner, FieldError};
use crate::net::gateway::Gateway;
use crate::net::types::{Booking, Client, ClientPayload};
use crate::state::fetch::{FetchState, SubmitState};
use crate::util::validation::{is_valid_email, required};

pub const CLIENTS_ROUTE: &str = "/clients";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub middle_name: String,
    pub is_registered: bool,
}

impl Default for ClientFormInput {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            middle_name: String::new(),
            is_registered: true,
        }
    }
}

impl ClientFormInput {
    pub fn from_client(client: &Client) -> Self {
        Self {
            first_name: client.first_name.clone(),
            last_name: client.last_name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone().unwrap_or_default(),
            middle_name: client.middle_name.clone().unwrap_or_default(),
            is_registered: client.is_registered,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientFieldErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

pub fn validate_client_input(input: &ClientFormInput) -> Result<ClientPayload, ClientFieldErrors> {
    let mut errors = ClientFieldErrors::default();
    let first_name = required(&input.first_name);
    if first_name.is_none() {
        errors.first_name = Some("First name is required");
    }
    let last_name = required(&input.last_name);
    if last_name.is_none() {
        errors.last_name = Some("Last name is required");
    }
    let email = input.email.trim();
    if !is_valid_email(email) {
        errors.email = Some("Invalid email");
    }
    let phone = required(&input.phone);
    if phone.is_none() {
        errors.phone = Some("Phone is required");
    }
    match (first_name, last_name, phone) {
        (Some(first_name), Some(last_name), Some(phone)) if errors.email.is_none() => Ok(ClientPayload {
            first_name,
            last_name,
            middle_name: input.middle_name.trim().to_owned(),
            email: email.to_owned(),
            phone,
            is_registered: input.is_registered,
        }),
        _ => Err(errors),
    }
}

#[component]
pub fn ClientForm(
    initial: ClientFormInput,
    #[prop(into)] submit_label: String,
    on_submit: Callback<ClientPayload>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let input = RwSignal::new(initial);
    let errors = RwSignal::new(ClientFieldErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_client_input(&input.get()) {
            Ok(payload) => {
                errors.set(ClientFieldErrors::default());
                on_submit.run(payload);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <label class="form-label">"First Name"</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || input.get().first_name
                on:input=move |ev| input.update(|i| i.first_name = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().first_name) />

            <label class="form-label">"Last Name"</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || input.get().last_name
                on:input=move |ev| input.update(|i| i.last_name = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().last_name) />

            <label class="form-label">"Email"</label>
            <input
                class="form-input"
                type="email"
                prop:value=move || input.get().email
                on:input=move |ev| input.update(|i| i.email = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().email) />

            <label class="form-label">"Phone"</label>
            <input
                class="form-input"
                type="tel"
                prop:value=move || input.get().phone
                on:input=move |ev| input.update(|i| i.phone = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().phone) />

            <div class="entity-form__actions">
                <a href=CLIENTS_ROUTE class="btn">"Cancel"</a>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn BookingsTable(bookings: Vec<Booking>) -> impl IntoView {
    if bookings.is_empty() {
        return view! { <p class="page-empty">"No bookings for this client."</p> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Booking"</th>
                    <th>"Check-in"</th>
                    <th>"Check-out"</th>
                    <th>"Guests"</th>
                    <th>"Payment"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {bookings
                    .into_iter()
                    .map(|b| {
                        view! {
                            <tr>
                                <td>{format!("#{}", b.booking_id)}</td>
                                <td>{b.check_in}</td>
                                <td>{b.check_out}</td>
                                <td>{b.guests_count}</td>
                                <td>{b.payment_method}</td>
                                <td>{b.status}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn return_to_list_when_saved(submit: RwSignal<SubmitState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if submit.get().saved {
            navigate(CLIENTS_ROUTE, NavigateOptions::default());
        }
    });
}

#[component]
pub fn ClientCreatePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let submit = RwSignal::new(SubmitState::default());
    return_to_list_when_saved(submit);

    let on_submit = Callback::new(move |payload: ClientPayload| {
        submit.update(SubmitState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_client(&gateway, &payload).await;
                submit.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, payload);
        }
    });

    view! {
        <section class="form-page">
            <h1>"Add Client"</h1>
            <ErrorBanner message=Signal::derive(move || submit.get().error) />
            <ClientForm
                initial=ClientFormInput::default()
                submit_label="Create Client"
                on_submit=on_submit
                busy=Signal::derive(move || submit.get().busy)
            />
        </section>
    }
}

#[component]
pub fn ClientEditPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let client_id = move || params.read().get("client_id").and_then(|raw| raw.parse::<i64>().ok());

    let client = RwSignal::new(FetchState::<Client>::default());
    let submit = RwSignal::new(SubmitState::default());
    return_to_list_when_saved(submit);

    let gateway_load = gateway.clone();
    Effect::new(move || {
        let Some(id) = client_id() else {
            client.set(FetchState { value: None, loading: false, error: Some("Unknown client id".to_owned()) });
            return;
        };
        client.update(FetchState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway_load.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::get_client(&gateway, id).await;
                client.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway_load, id);
        }
    });

    let on_submit = Callback::new(move |payload: ClientPayload| {
        let Some(id) = client.get_untracked().value.map(|c| c.id) else {
            return;
        };
        submit.update(SubmitState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_client(&gateway, id, &payload).await;
                submit.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, id, payload);
        }
    });

    let banner = Signal::derive(move || submit.get().error.or_else(|| client.get().error));

    view! {
        <section class="form-page">
            <h1>"Edit Client"</h1>
            <ErrorBanner message=banner />
            {move || match client.get().value {
                Some(loaded) => view! {
                    <p class="form-page__subtitle">{format!("Editing {}", loaded.full_name())}</p>
                    <ClientForm
                        initial=ClientFormInput::from_client(&loaded)
                        submit_label="Save Changes"
                        on_submit=on_submit
                        busy=Signal::derive(move || submit.get().busy)
                    />
                    <h2>"Bookings"</h2>
                    <BookingsTable bookings=loaded.bookings.clone() />
                }
                .into_any(),
                None => view! { <p class="page-loading">"Loading client details..."</p> }.into_any(),
            }}
        </section>
    }
}
