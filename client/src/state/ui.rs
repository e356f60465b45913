//! Local UI chrome state (mobile menu, language label, dark mode).
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of catalog/selection state so the
//! navigation bar can evolve independently of page content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use catalog::language::Language;

/// UI state shared through a `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub language: Language,
    pub dark_mode: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu, e.g. after following a nav link.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }
}
