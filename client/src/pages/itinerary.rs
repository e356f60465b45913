//! Featured itinerary: day-by-day stops resolved against the catalog.

use catalog::{CatalogEntry, Interaction};
use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::components::rating::Rating;
use crate::state::selection::SelectionHandle;
use crate::state::site_data::SiteData;
use crate::util::format::format_price;

#[component]
pub fn ItineraryPage() -> impl IntoView {
    let data = expect_context::<SiteData>();
    let selection = SelectionHandle::new();
    let catalog = data.catalog.clone();
    let itinerary = data.itinerary.clone();

    let total = format_price(itinerary.estimated_cost(&catalog));
    let days = itinerary
        .days
        .iter()
        .map(|day| {
            let stops = day
                .resolve(&catalog)
                .into_iter()
                .cloned()
                .map(|entry| view! { <ItineraryStop entry=entry selection=selection/> })
                .collect_view();
            view! {
                <li class="itinerary-page__day">
                    <h2>{format!("Day {}: {}", day.day, day.title)}</h2>
                    <ol class="itinerary-page__stops">{stops}</ol>
                </li>
            }
        })
        .collect_view();

    let on_close = Callback::new(move |()| selection.dispatch(Interaction::Close));
    let detail = move || {
        selection
            .detail(&catalog)
            .map(|entry| view! { <DetailModal entry=entry on_close=on_close/> })
    };

    view! {
        <div class="itinerary-page">
            <header class="page-header">
                <h1>{itinerary.title.clone()}</h1>
                <p class="itinerary-page__total">"Estimated cost: " {total}</p>
            </header>
            <ol class="itinerary-page__days">{days}</ol>
            {detail}
        </div>
    }
}

#[component]
fn ItineraryStop(entry: CatalogEntry, selection: SelectionHandle) -> impl IntoView {
    let id = entry.id;
    view! {
        <li class="itinerary-page__stop" on:click=move |_| selection.dispatch(Interaction::Click(id))>
            <span class="itinerary-page__stop-kind">{entry.kind.label()}</span>
            <span class="itinerary-page__stop-name">{entry.name}</span>
            <Rating rating=entry.rating/>
            <span class="itinerary-page__stop-price">{format_price(entry.price)}</span>
        </li>
    }
}
