//! Clickable card for one catalog entry.

use catalog::{CatalogEntry, Interaction};
use leptos::prelude::*;

use crate::components::rating::Rating;
use crate::state::selection::SelectionHandle;
use crate::util::format::format_price;

/// Card showing an entry's image, name, rating, price and tags.
///
/// Clicking toggles the entry in `selection`, so clicking the card whose
/// modal is already open closes it.
#[component]
pub fn EntryCard(entry: CatalogEntry, selection: SelectionHandle) -> impl IntoView {
    let id = entry.id;
    let class = move || {
        if selection.is_selected(id) {
            "entry-card entry-card--active"
        } else {
            "entry-card"
        }
    };

    view! {
        <article
            class=class
            role="button"
            tabindex="0"
            on:click=move |_| selection.dispatch(Interaction::Click(id))
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    selection.dispatch(Interaction::Click(id));
                }
            }
        >
            <img class="entry-card__media" src=entry.media alt=entry.name.clone() loading="lazy"/>
            <div class="entry-card__body">
                <span class="entry-card__kind">{entry.kind.label()}</span>
                <h3 class="entry-card__name">{entry.name}</h3>
                <div class="entry-card__meta">
                    <Rating rating=entry.rating/>
                    <span class="entry-card__price">{format_price(entry.price)}</span>
                </div>
                <ul class="entry-card__tags">
                    {entry.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}
