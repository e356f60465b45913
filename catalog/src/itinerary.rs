//! Day-by-day itinerary built from catalog ids.
//!
//! Stops reference entries by id only. Resolution follows the same rule as
//! lookup: an id missing from the catalog is skipped, never an error.

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod itinerary_test;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entry::{CatalogEntry, EntryId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number.
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub stops: Vec<EntryId>,
}

impl ItineraryDay {
    /// Entries for this day's stops, in stop order, skipping unknown ids.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        self.stops.iter().filter_map(|id| catalog.find(*id)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: String,
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Parse an itinerary from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error on malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Number of stops across all days, resolvable or not.
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.days.iter().map(|d| d.stops.len()).sum()
    }

    /// Sum of prices of every stop present in `catalog`.
    #[must_use]
    pub fn estimated_cost(&self, catalog: &Catalog) -> f64 {
        self.days
            .iter()
            .flat_map(|d| d.resolve(catalog))
            .map(|e| e.price)
            .sum()
    }

    /// Stop ids that `catalog` does not contain, in itinerary order.
    #[must_use]
    pub fn missing_stops(&self, catalog: &Catalog) -> Vec<EntryId> {
        self.days
            .iter()
            .flat_map(|d| d.stops.iter().copied())
            .filter(|id| !catalog.contains(*id))
            .collect()
    }
}
