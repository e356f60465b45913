//! Landing page: hero banner and highlights from each catalog section.

use catalog::EntryKind;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::entry_grid::EntryGrid;

const HIGHLIGHTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"See India before you go"</h1>
                <p>"Explore heritage sites on the map, preview them in augmented reality, and take home crafts straight from the artisans."</p>
                <div class="home-page__cta">
                    <A href="/map" attr:class="btn btn--primary">"Open the map"</A>
                    <A href="/experiences" attr:class="btn">"Browse AR experiences"</A>
                </div>
            </section>

            <section class="home-page__section">
                <h2>"Popular destinations"</h2>
                <EntryGrid kind=EntryKind::Site limit=HIGHLIGHTS/>
            </section>

            <section class="home-page__section">
                <h2>"Step inside"</h2>
                <EntryGrid kind=EntryKind::Experience limit=HIGHLIGHTS/>
            </section>

            <section class="home-page__section">
                <h2>"From the marketplace"</h2>
                <EntryGrid kind=EntryKind::Marketplace limit=HIGHLIGHTS/>
            </section>
        </div>
    }
}
