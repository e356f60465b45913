//! Artisan marketplace listing.

use catalog::EntryKind;
use leptos::prelude::*;

use crate::components::entry_grid::EntryGrid;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    view! {
        <div class="marketplace-page">
            <header class="page-header">
                <h1>"Marketplace"</h1>
                <p>"Handmade crafts sourced directly from the regions you visit."</p>
            </header>
            <EntryGrid kind=EntryKind::Marketplace/>
        </div>
    }
}
