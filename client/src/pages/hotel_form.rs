//! Create and edit screens for a single hotel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/hotels/new` starts from an empty form; `/hotels/:hotel_id` loads the
//! record first. Both submit through `HotelForm` and return to the list once
//! the backend accepts the payload.

#[cfg(test)]
#[path = "hotel_form_test.rs"]
mod hotel_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::{ErrorBanner, FieldError};
use crate::components::star_rating::MAX_STARS;
use crate::net::gateway::Gateway;
use crate::net::types::{Hotel, HotelPayload};
use crate::state::fetch::{FetchState, SubmitState};
use crate::util::validation::required;

pub const HOTELS_ROUTE: &str = "/hotels";

/// Raw text of the hotel form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelFormInput {
    pub name: String,
    pub location: String,
    pub stars: String,
    pub description: String,
    pub policy: String,
}

impl HotelFormInput {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            stars: hotel.stars.to_string(),
            description: hotel.description.clone().unwrap_or_default(),
            policy: hotel.policy.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotelFieldErrors {
    pub name: Option<&'static str>,
    pub location: Option<&'static str>,
    pub stars: Option<&'static str>,
}

/// Validate the form and build the payload sent to the backend.
pub fn validate_hotel_input(input: &HotelFormInput) -> Result<HotelPayload, HotelFieldErrors> {
    let mut errors = HotelFieldErrors::default();
    let name = required(&input.name);
    if name.is_none() {
        errors.name = Some("Hotel name is required");
    }
    let location = required(&input.location);
    if location.is_none() {
        errors.location = Some("Location is required");
    }
    let stars = match parse_stars(&input.stars) {
        Ok(stars) => Some(stars),
        Err(message) => {
            errors.stars = Some(message);
            None
        }
    };
    match (name, location, stars) {
        (Some(name), Some(location), Some(stars)) => Ok(HotelPayload {
            name,
            location,
            description: input.description.trim().to_owned(),
            policy: input.policy.trim().to_owned(),
            stars,
        }),
        _ => Err(errors),
    }
}

fn parse_stars(raw: &str) -> Result<u8, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Min 1 star");
    }
    let value: i64 = raw.parse().map_err(|_| "Stars must be a number")?;
    if value < 1 {
        return Err("Min 1 star");
    }
    if value > i64::from(MAX_STARS) {
        return Err("Max 5 stars");
    }
    u8::try_from(value).map_err(|_| "Max 5 stars")
}

/// Shared form body. `on_submit` receives a validated payload.
#[component]
pub fn HotelForm(
    initial: HotelFormInput,
    #[prop(into)] submit_label: String,
    on_submit: Callback<HotelPayload>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let input = RwSignal::new(initial);
    let errors = RwSignal::new(HotelFieldErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_hotel_input(&input.get()) {
            Ok(payload) => {
                errors.set(HotelFieldErrors::default());
                on_submit.run(payload);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <form class="entity-form" on:submit=submit>
            <label class="form-label">"Name"</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || input.get().name
                on:input=move |ev| input.update(|i| i.name = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().name) />

            <label class="form-label">"Location"</label>
            <input
                class="form-input"
                type="text"
                prop:value=move || input.get().location
                on:input=move |ev| input.update(|i| i.location = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().location) />

            <label class="form-label">"Stars"</label>
            <input
                class="form-input"
                type="number"
                min="1"
                max="5"
                prop:value=move || input.get().stars
                on:input=move |ev| input.update(|i| i.stars = event_target_value(&ev))
            />
            <FieldError message=Signal::derive(move || errors.get().stars) />

            <label class="form-label">"Description"</label>
            <textarea
                class="form-input"
                rows="3"
                prop:value=move || input.get().description
                on:input=move |ev| input.update(|i| i.description = event_target_value(&ev))
            ></textarea>

            <label class="form-label">"Policy"</label>
            <textarea
                class="form-input"
                rows="3"
                prop:value=move || input.get().policy
                on:input=move |ev| input.update(|i| i.policy = event_target_value(&ev))
            ></textarea>

            <div class="entity-form__actions">
                <a href=HOTELS_ROUTE class="btn">"Cancel"</a>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}

/// Navigate back to the list once a submission has been accepted.
fn return_to_list_when_saved(submit: RwSignal<SubmitState>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if submit.get().saved {
            navigate(HOTELS_ROUTE, NavigateOptions::default());
        }
    });
}

#[component]
pub fn HotelCreatePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let submit = RwSignal::new(SubmitState::default());
    return_to_list_when_saved(submit);

    let on_submit = Callback::new(move |payload: HotelPayload| {
        submit.update(SubmitState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_hotel(&gateway, &payload).await;
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
            <h1>"Add Hotel"</h1>
            <ErrorBanner message=Signal::derive(move || submit.get().error) />
            <HotelForm
                initial=HotelFormInput::default()
                submit_label="Create Hotel"
                on_submit=on_submit
                busy=Signal::derive(move || submit.get().busy)
            />
        </section>
    }
}

#[component]
pub fn HotelEditPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let hotel_id = move || params.read().get("hotel_id").and_then(|raw| raw.parse::<i64>().ok());

    let hotel = RwSignal::new(FetchState::<Hotel>::default());
    let submit = RwSignal::new(SubmitState::default());
    return_to_list_when_saved(submit);

    let gateway_load = gateway.clone();
    Effect::new(move || {
        let Some(id) = hotel_id() else {
            hotel.set(FetchState { value: None, loading: false, error: Some("Unknown hotel id".to_owned()) });
            return;
        };
        hotel.update(FetchState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway_load.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::get_hotel(&gateway, id).await;
                hotel.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway_load, id);
        }
    });

    let on_submit = Callback::new(move |payload: HotelPayload| {
        let Some(id) = hotel.get_untracked().value.map(|h| h.id) else {
            return;
        };
        submit.update(SubmitState::begin);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::update_hotel(&gateway, id, &payload).await;
                submit.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, id, payload);
        }
    });

    let banner = Signal::derive(move || submit.get().error.or_else(|| hotel.get().error));

    view! {
        <section class="form-page">
            <h1>"Edit Hotel"</h1>
            <ErrorBanner message=banner />
            {move || match hotel.get().value {
                Some(loaded) => view! {
                    <HotelForm
                        initial=HotelFormInput::from_hotel(&loaded)
                        submit_label="Save Changes"
                        on_submit=on_submit
                        busy=Signal::derive(move || submit.get().busy)
                    />
                }
                .into_any(),
                None => view! { <p class="page-loading">"Loading hotel..."</p> }.into_any(),
            }}
        </section>
    }
}
