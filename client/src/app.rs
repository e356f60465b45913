//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    experiences::ExperiencesPage, home::HomePage, itinerary::ItineraryPage, map::MapPage,
    marketplace::MarketplacePage,
};
use crate::state::{site_data::SiteData, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the seed catalog and UI chrome state, then sets up client-side
/// routing. Selections are page-scoped and created by each page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(SiteData::load());

    // Follow the system color scheme once hydrated.
    Effect::new(move || {
        let prefers_dark = crate::util::dark_mode::system_prefers_dark();
        crate::util::dark_mode::apply(prefers_dark);
        ui.update(|u| u.dark_mode = prefers_dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wanderlens.css"/>
        <Title text="Wanderlens"/>

        <Router>
            <div class="app" lang=move || ui.with(|u| u.language.code())>
                <NavBar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("map") view=MapPage/>
                        <Route path=StaticSegment("experiences") view=ExperiencesPage/>
                        <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                        <Route path=StaticSegment("itinerary") view=ItineraryPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
