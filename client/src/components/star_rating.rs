//! Five-star hotel rating display.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Filled/empty state for each of the five stars.
pub fn star_fill(stars: u8) -> [bool; MAX_STARS as usize] {
    std::array::from_fn(|i| i < usize::from(stars))
}

#[component]
pub fn StarRating(stars: u8) -> impl IntoView {
    let title = format!("{} of {MAX_STARS} stars", stars.min(MAX_STARS));
    view! {
        <span class="star-rating" title=title>
            {star_fill(stars)
                .into_iter()
                .map(|filled| {
                    view! { <span class={if filled { "star star--filled" } else { "star" }}>"★"</span> }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
