//! Star rating badge.

use leptos::prelude::*;

use crate::util::format::{format_rating, stars};

#[component]
pub fn Rating(rating: f64) -> impl IntoView {
    view! {
        <span class="rating" title=format!("Rated {} out of 5", format_rating(rating))>
            <span class="rating__stars" aria-hidden="true">{stars(rating)}</span>
            <span class="rating__value">{format_rating(rating)}</span>
        </span>
    }
}
