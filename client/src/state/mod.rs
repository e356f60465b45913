//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `site_data` holds the immutable seed data shared by every page, `selection`
//! wires the catalog crate's selection controller into Leptos signals, and
//! `ui` keeps transient chrome flags (menu, language, dark mode) away from
//! catalog concerns.

pub mod selection;
pub mod site_data;
pub mod ui;
