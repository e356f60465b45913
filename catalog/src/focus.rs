//! Hover + pin focus for surfaces that show a tooltip on hover and keep it
//! open on click.
//!
//! DESIGN
//! ======
//! A mouse click, and a touch tap with its emulated `mouseenter`, always
//! arrive as `HoverEnter(id)` followed by `Click(id)`. Routing both to one
//! [`Selection`] would select and then immediately toggle it off. Hover and
//! pin are therefore two selections; the pinned one wins when both are set.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use serde::{Deserialize, Serialize};

use crate::entry::EntryId;
use crate::selection::{Interaction, Selection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    hovered: Selection,
    pinned: Selection,
}

impl Focus {
    #[must_use]
    pub const fn none() -> Self {
        Self { hovered: Selection::none(), pinned: Selection::none() }
    }

    /// Route a shell interaction.
    ///
    /// - `HoverEnter` / `HoverLeave` move the hover selection only.
    /// - `Click` pins the entry; clicking the pinned entry unpins it and drops
    ///   the hover too, so the tooltip closes under the pointer.
    /// - `Close` clears both.
    pub fn apply(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::HoverEnter(id) => self.hovered.select(id),
            Interaction::HoverLeave => self.hovered.clear(),
            Interaction::Click(id) => {
                if self.pinned.is_selected(id) {
                    self.clear();
                } else {
                    self.pinned.select(id);
                }
            }
            Interaction::Close => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.hovered.clear();
        self.pinned.clear();
    }

    /// Selection the shell should render: the pinned entry, else the hovered one.
    #[must_use]
    pub fn effective(&self) -> Selection {
        Selection::from(self.pinned.current().or(self.hovered.current()))
    }

    #[must_use]
    pub fn current(&self) -> Option<EntryId> {
        self.effective().current()
    }

    #[must_use]
    pub fn is_pinned(&self, id: EntryId) -> bool {
        self.pinned.is_selected(id)
    }
}
