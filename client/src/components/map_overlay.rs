//! Interactive map overlay: one marker per located entry, one tooltip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markers are placed from each entry's coordinates with
//! [`catalog::map::project`] and share a single selection. Hovering a marker
//! shows its tooltip; clicking pins it open until clicked again or closed.

use std::sync::Arc;

use catalog::map::{MapBounds, MarkerPosition, markers, project};
use catalog::{Catalog, CatalogEntry, EntryId, Interaction};
use leptos::prelude::*;

use crate::components::rating::Rating;
use crate::state::selection::SelectionHandle;
use crate::util::format::format_price;

/// Static map image with positioned markers and a tooltip for the selection.
#[component]
pub fn MapOverlay(
    catalog: Arc<Catalog>,
    bounds: MapBounds,
    selection: SelectionHandle,
    #[prop(into)] image: String,
) -> impl IntoView {
    let marker_views = markers(&catalog, &bounds)
        .into_iter()
        .filter_map(|(id, pos)| {
            let name = catalog.find(id)?.name.clone();
            Some(view! { <MapMarker id=id name=name position=pos selection=selection/> })
        })
        .collect_view();

    let tooltip = move || {
        let entry = selection.detail(&catalog)?;
        let position = project(&bounds, entry.location?)?;
        Some(view! { <MarkerTooltip entry=entry position=position selection=selection/> })
    };

    view! {
        <div class="map-overlay">
            <img class="map-overlay__image" src=image alt="Map of featured destinations"/>
            <div class="map-overlay__markers">{marker_views}</div>
            {tooltip}
        </div>
    }
}

#[component]
fn MapMarker(id: EntryId, name: String, position: MarkerPosition, selection: SelectionHandle) -> impl IntoView {
    let class = move || {
        if selection.is_selected(id) {
            "map-marker map-marker--active"
        } else {
            "map-marker"
        }
    };

    view! {
        <button
            class=class
            style=position.css()
            title=name.clone()
            aria-label=name
            on:mouseenter=move |_| selection.dispatch(Interaction::HoverEnter(id))
            on:mouseleave=move |_| selection.dispatch(Interaction::HoverLeave)
            on:click=move |_| selection.dispatch(Interaction::Click(id))
        >
            <span class="map-marker__pin" aria-hidden="true"></span>
        </button>
    }
}

#[component]
fn MarkerTooltip(entry: CatalogEntry, position: MarkerPosition, selection: SelectionHandle) -> impl IntoView {
    view! {
        <div class="map-tooltip" style=position.css() role="tooltip">
            <button
                class="map-tooltip__close"
                on:click=move |_| selection.dispatch(Interaction::Close)
                title="Close"
            >
                "✕"
            </button>
            <img class="map-tooltip__media" src=entry.media alt=entry.name.clone()/>
            <strong class="map-tooltip__name">{entry.name}</strong>
            <div class="map-tooltip__meta">
                <Rating rating=entry.rating/>
                <span class="map-tooltip__price">{format_price(entry.price)}</span>
            </div>
            <p class="map-tooltip__description">{entry.description}</p>
        </div>
    }
}
