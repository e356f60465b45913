//! AR experience browser.

use catalog::EntryKind;
use leptos::prelude::*;

use crate::components::entry_grid::EntryGrid;

/// Grid of AR/VR experiences; clicking a card opens its detail modal.
#[component]
pub fn ExperiencesPage() -> impl IntoView {
    view! {
        <div class="experiences-page">
            <header class="page-header">
                <h1>"AR Experiences"</h1>
                <p>"Walk through monuments and markets from anywhere. Pick an experience to see what is inside."</p>
            </header>
            <EntryGrid kind=EntryKind::Experience/>
        </div>
    }
}
