//! Projection of entry coordinates onto the map overlay.
//!
//! The overlay is a fixed-aspect box laid over a static map image. Markers are
//! positioned in percentages of that box using a linear (equirectangular)
//! mapping between the image's geographic bounds and its edges. Percentages
//! keep the placement correct at every responsive breakpoint.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entry::{EntryId, GeoPoint};

/// Geographic bounds covered by the map image, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

/// Bounds of the bundled India overview map.
pub const INDIA_BOUNDS: MapBounds = MapBounds { north: 37.5, south: 6.5, west: 68.0, east: 97.5 };

/// Marker anchor, as percentages from the overlay's left and top edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub left_pct: f64,
    pub top_pct: f64,
}

impl MarkerPosition {
    /// Inline CSS placing an absolutely positioned marker.
    #[must_use]
    pub fn css(&self) -> String {
        format!("left: {:.2}%; top: {:.2}%;", self.left_pct, self.top_pct)
    }
}

/// Place `point` inside `bounds`.
///
/// Returns `None` for points outside the bounds (edges included as inside),
/// for non-finite coordinates, and for empty or inverted bounds.
#[must_use]
pub fn project(bounds: &MapBounds, point: GeoPoint) -> Option<MarkerPosition> {
    let width = bounds.east - bounds.west;
    let height = bounds.north - bounds.south;
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    if !(bounds.south..=bounds.north).contains(&point.lat) || !(bounds.west..=bounds.east).contains(&point.lon) {
        return None;
    }
    Some(MarkerPosition {
        left_pct: (point.lon - bounds.west) / width * 100.0,
        top_pct: (bounds.north - point.lat) / height * 100.0,
    })
}

/// Marker positions for every entry with a projectable location, in catalog order.
#[must_use]
pub fn markers(catalog: &Catalog, bounds: &MapBounds) -> Vec<(EntryId, MarkerPosition)> {
    catalog
        .iter()
        .filter_map(|entry| {
            let point = entry.location?;
            project(bounds, point).map(|pos| (entry.id, pos))
        })
        .collect()
}
