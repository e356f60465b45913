//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog surfaces while reading shared
//! state from Leptos context providers. Anything that opens a tooltip or a
//! modal does so by dispatching to a page-owned `SelectionHandle`.

pub mod detail_modal;
pub mod entry_card;
pub mod entry_grid;
pub mod map_overlay;
pub mod nav_bar;
pub mod rating;
