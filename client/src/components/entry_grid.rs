//! Grid of entry cards for one catalog section, with its detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The experience browser, the marketplace and the home page highlights all
//! render through this component. Each grid owns its own selection, so
//! opening a card in one grid never affects another.

use catalog::{EntryKind, Interaction};
use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::components::entry_card::EntryCard;
use crate::state::selection::SelectionHandle;
use crate::state::site_data::SiteData;

/// Cards for every entry of `kind`, optionally capped at `limit`.
#[component]
pub fn EntryGrid(kind: EntryKind, #[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let data = expect_context::<SiteData>();
    let selection = SelectionHandle::new();

    let cards = data
        .catalog
        .of_kind(kind)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .map(|entry| view! { <EntryCard entry=entry selection=selection/> })
        .collect_view();
    let empty_note = data
        .catalog
        .of_kind(kind)
        .next()
        .is_none()
        .then(|| view! { <p class="entry-grid__empty">"Nothing to show yet."</p> });

    let on_close = Callback::new(move |()| selection.dispatch(Interaction::Close));
    let catalog = data.catalog.clone();
    let detail = move || {
        selection
            .detail(&catalog)
            .map(|entry| view! { <DetailModal entry=entry on_close=on_close/> })
    };

    view! {
        <div class="entry-grid">
            {empty_note}
            <div class="entry-grid__cards">{cards}</div>
            {detail}
        </div>
    }
}
