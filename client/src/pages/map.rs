//! Interactive map page: destination markers plus a side list.
//!
//! The side list shares the map's selection, so hovering a list row
//! highlights the same marker and tooltip as hovering the marker itself.

use catalog::map::INDIA_BOUNDS;
use catalog::{EntryKind, Interaction};
use leptos::prelude::*;

use crate::components::map_overlay::MapOverlay;
use crate::components::rating::Rating;
use crate::state::selection::SelectionHandle;
use crate::state::site_data::SiteData;

const MAP_IMAGE: &str = "/images/map/india.svg";

#[component]
pub fn MapPage() -> impl IntoView {
    let data = expect_context::<SiteData>();
    let selection = SelectionHandle::new();

    let rows = data
        .catalog
        .of_kind(EntryKind::Site)
        .map(|entry| {
            let id = entry.id;
            let class = move || {
                if selection.is_selected(id) {
                    "map-page__row map-page__row--active"
                } else {
                    "map-page__row"
                }
            };
            view! {
                <li
                    class=class
                    on:mouseenter=move |_| selection.dispatch(Interaction::HoverEnter(id))
                    on:mouseleave=move |_| selection.dispatch(Interaction::HoverLeave)
                    on:click=move |_| selection.dispatch(Interaction::Click(id))
                >
                    <span class="map-page__row-name">{entry.name.clone()}</span>
                    <Rating rating=entry.rating/>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="map-page">
            <header class="page-header">
                <h1>"Explore the map"</h1>
                <p>"Hover a marker for a quick look, click to keep it open."</p>
            </header>
            <div class="map-page__layout">
                <MapOverlay catalog=data.catalog.clone() bounds=INDIA_BOUNDS selection=selection image=MAP_IMAGE/>
                <ul class="map-page__list">{rows}</ul>
            </div>
        </div>
    }
}
