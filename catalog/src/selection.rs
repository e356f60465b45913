//! Selection controller: the single optional "currently open" entry.
//!
//! DESIGN
//! ======
//! One selection per browsing session, owned by the rendering shell. Every
//! transition is total and synchronous. Selecting never validates the id
//! against a catalog; that is deferred to [`crate::detail::detail_for`] at
//! render time, which treats an unknown id the same as no selection.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::entry::EntryId;

/// User interaction events the shell routes to a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pointer entered a marker or card.
    HoverEnter(EntryId),
    /// Pointer left the hovered element.
    HoverLeave,
    /// Marker or card clicked. Clicking the open entry closes it.
    Click(EntryId),
    /// Close button, backdrop click, or Escape.
    Close,
}

/// Optional reference to exactly one entry id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    current: Option<EntryId>,
}

impl Selection {
    /// No entry selected.
    #[must_use]
    pub const fn none() -> Self {
        Self { current: None }
    }

    /// Selection already pointing at `id`.
    #[must_use]
    pub const fn of(id: EntryId) -> Self {
        Self { current: Some(id) }
    }

    /// Replace the selection with `id`. Never stacks.
    pub fn select(&mut self, id: EntryId) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear when `id` is already selected, otherwise select it.
    pub fn toggle(&mut self, id: EntryId) {
        if self.current == Some(id) {
            self.clear();
        } else {
            self.select(id);
        }
    }

    /// Route a shell interaction to the matching transition.
    pub fn apply(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::HoverEnter(id) => self.select(id),
            Interaction::Click(id) => self.toggle(id),
            Interaction::HoverLeave | Interaction::Close => self.clear(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<EntryId> {
        self.current
    }

    #[must_use]
    pub fn is_selected(&self, id: EntryId) -> bool {
        self.current == Some(id)
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.current.is_none()
    }
}

impl From<Option<EntryId>> for Selection {
    fn from(current: Option<EntryId>) -> Self {
        Self { current }
    }
}
