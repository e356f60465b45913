//! Embedded sample data: the demo catalog and featured itinerary.
//!
//! Both are compiled into the binary as JSON and parsed on demand. The catalog
//! goes through the same validation as any other.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::catalog::{Catalog, CatalogError};
use crate::itinerary::Itinerary;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const ITINERARY_JSON: &str = include_str!("../data/itinerary.json");

/// The demo catalog.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the embedded data is malformed.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(CATALOG_JSON)
}

/// The featured itinerary.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSeed`] if the embedded data is malformed.
pub fn itinerary() -> Result<Itinerary, CatalogError> {
    Ok(Itinerary::from_json(ITINERARY_JSON)?)
}
