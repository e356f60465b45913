//! Top navigation bar with mobile menu, language label and dark-mode toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routed pages. All three toggles are single flips
//! on the shared `UiState`; the language toggle only swaps the button label.
//! Following any menu link collapses the mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/map", "Map"),
    ("/experiences", "AR Experiences"),
    ("/marketplace", "Marketplace"),
    ("/itinerary", "Itinerary"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_class = move || {
        if ui.with(|u| u.menu_open) {
            "nav-bar__menu nav-bar__menu--open"
        } else {
            "nav-bar__menu"
        }
    };

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "Wanderlens"
            </A>

            <button
                class="nav-bar__hamburger"
                aria-label="Toggle menu"
                aria-expanded=move || ui.with(|u| u.menu_open).to_string()
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
            </button>

            <nav class=menu_class on:click=move |_| ui.update(UiState::close_menu)>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href attr:class="nav-bar__link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__language"
                on:click=move |_| ui.update(UiState::toggle_language)
                title="Switch language"
            >
                {move || ui.with(|u| u.language.label())}
            </button>

            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.with(|u| u.dark_mode));
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
