//! Leptos binding for the catalog selection controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page that shows tooltips or a detail modal owns one `SelectionHandle`.
//! Components never mutate the selection directly; they dispatch
//! [`Interaction`]s, and the detail view is re-derived from the catalog on
//! every render through [`SelectionHandle::detail`]. The handle tracks hover
//! and pin separately ([`Focus`]), so a click that follows a hover keeps the
//! entry open instead of toggling it shut.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use catalog::{Catalog, CatalogEntry, EntryId, Focus, Interaction, Selection, detail_for};
use leptos::prelude::*;

/// Copyable handle to one page's selection signal.
#[derive(Clone, Copy, Debug)]
pub struct SelectionHandle {
    signal: RwSignal<Focus>,
}

impl Default for SelectionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionHandle {
    pub fn new() -> Self {
        Self { signal: RwSignal::new(Focus::none()) }
    }

    /// Apply a user interaction; subscribers re-render.
    pub fn dispatch(self, interaction: Interaction) {
        self.signal.update(|focus| {
            let before = focus.current();
            focus.apply(interaction);
            log_transition(interaction, before, focus.current());
        });
    }

    /// Tracked read of the selection to render (pinned, else hovered).
    pub fn get(self) -> Selection {
        self.signal.with(Focus::effective)
    }

    /// Tracked check used for "active" styling on cards and markers.
    pub fn is_selected(self, id: EntryId) -> bool {
        self.signal.with(|focus| focus.current() == Some(id))
    }

    /// Entry to show in the detail panel, looked up fresh on each call.
    pub fn detail(self, catalog: &Catalog) -> Option<CatalogEntry> {
        self.signal.with(|focus| detail_for(catalog, &focus.effective()).cloned())
    }
}

#[cfg(feature = "hydrate")]
fn log_transition(interaction: Interaction, before: Option<EntryId>, after: Option<EntryId>) {
    log::debug!("selection {interaction:?}: {before:?} -> {after:?}");
}

#[cfg(not(feature = "hydrate"))]
fn log_transition(_interaction: Interaction, _before: Option<EntryId>, _after: Option<EntryId>) {}
