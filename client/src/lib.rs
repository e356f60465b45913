//! # client
//!
//! Leptos + WASM front-end for the Wanderlens tourism demo.
//!
//! This crate is the rendering shell around the `catalog` crate: pages,
//! components and small pieces of view state (mobile menu, language label,
//! dark mode). Every detail panel, tooltip and modal is derived from the
//! shared catalog and a per-page [`catalog::Selection`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
