//! Modal showing the full detail of the selected entry.

#[cfg(test)]
#[path = "detail_modal_test.rs"]
mod detail_modal_test;

use catalog::{CatalogEntry, EntryKind};
use leptos::prelude::*;

use crate::components::rating::Rating;
use crate::util::format::format_price;

/// Whether a key press on the open dialog dismisses it.
pub(crate) fn closes_on_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Fullscreen modal for one entry. Closes on backdrop click, the close
/// button, or Escape. The dialog takes keyboard focus when it mounts so the
/// Escape handler receives key presses.
#[component]
pub fn DetailModal(entry: CatalogEntry, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            if el.focus().is_err() {
                leptos::logging::warn!("failed to focus detail dialog");
            }
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if closes_on_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let action = match entry.kind {
        EntryKind::Experience => "Launch AR preview",
        EntryKind::Marketplace => "Add to cart",
        EntryKind::Site => "Plan a visit",
    };

    view! {
        <div class="detail-modal__backdrop" on:click=on_backdrop>
            <div
                class="detail-modal"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="detail-modal__header">
                    <h2>{entry.name.clone()}</h2>
                    <button class="detail-modal__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                <img class="detail-modal__media" src=entry.media alt=entry.name/>
                <div class="detail-modal__meta">
                    <span class="detail-modal__kind">{entry.kind.label()}</span>
                    <Rating rating=entry.rating/>
                    <span class="detail-modal__price">{format_price(entry.price)}</span>
                </div>
                <p class="detail-modal__description">{entry.description}</p>
                <ul class="detail-modal__tags">
                    {entry.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                </ul>
                <div class="detail-modal__actions">
                    <button class="btn" on:click=on_close_click>
                        "Close"
                    </button>
                    <button class="btn btn--primary" disabled=true title="Demo only">
                        {action}
                    </button>
                </div>
            </div>
        </div>
    }
}
