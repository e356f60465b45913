//! Seed catalog and itinerary shared by every page.
//!
//! Loaded once when the app mounts and provided as context. The data is
//! immutable for the whole session, so pages hold it behind an `Arc`.

#[cfg(test)]
#[path = "site_data_test.rs"]
mod site_data_test;

use std::sync::Arc;

use catalog::Catalog;
use catalog::itinerary::Itinerary;

#[derive(Clone, Debug, Default)]
pub struct SiteData {
    pub catalog: Arc<Catalog>,
    pub itinerary: Arc<Itinerary>,
}

impl SiteData {
    /// Load the embedded seed data.
    ///
    /// Malformed seed data is logged and replaced by an empty catalog or
    /// itinerary so pages render their empty states instead of failing.
    pub fn load() -> Self {
        let catalog = catalog::seed::catalog().unwrap_or_else(|e| {
            leptos::logging::warn!("seed catalog unavailable: {e}");
            Catalog::default()
        });
        let itinerary = catalog::seed::itinerary().unwrap_or_else(|e| {
            leptos::logging::warn!("seed itinerary unavailable: {e}");
            Itinerary::default()
        });
        Self { catalog: Arc::new(catalog), itinerary: Arc::new(itinerary) }
    }
}
