//! Immutable, ordered catalog and id lookup.
//!
//! DESIGN
//! ======
//! The catalog is seed data, not a managed store: it is validated once at
//! construction and never mutated afterwards. Lookup is a linear scan because
//! catalogs here hold at most a few dozen entries.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use serde::Serialize;

use crate::entry::{CatalogEntry, EntryId, EntryKind};

/// Reasons a set of entries cannot form a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),
    #[error("entry {id} has negative rating {rating}")]
    NegativeRating { id: EntryId, rating: f64 },
    #[error("entry {id} has negative price {price}")]
    NegativePrice { id: EntryId, price: f64 },
    #[error("entry {id} has a non-finite {field}")]
    NonFiniteValue { id: EntryId, field: &'static str },
    #[error("invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}

/// Ordered collection of entries with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and that rating and price are
    /// finite and non-negative. Entry order is preserved.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, scanning in entry order.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            validate_entry(entry)?;
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSeed`] on malformed JSON, or any
    /// validation error from [`Catalog::new`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    /// Entry with `id`, or `None` when the id is unknown.
    #[must_use]
    pub fn find(&self, id: EntryId) -> Option<&CatalogEntry> {
        find(&self.entries, id)
    }

    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.find(id).is_some()
    }

    /// Entries of one kind, in catalog order.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// First entry in `entries` whose id equals `id`.
///
/// An unknown id is a normal absence, not an error. If ids are duplicated
/// the earliest match wins.
#[must_use]
pub fn find(entries: &[CatalogEntry], id: EntryId) -> Option<&CatalogEntry> {
    entries.iter().find(|e| e.id == id)
}

fn validate_entry(entry: &CatalogEntry) -> Result<(), CatalogError> {
    if !entry.rating.is_finite() {
        return Err(CatalogError::NonFiniteValue { id: entry.id, field: "rating" });
    }
    if !entry.price.is_finite() {
        return Err(CatalogError::NonFiniteValue { id: entry.id, field: "price" });
    }
    if entry.rating < 0.0 {
        return Err(CatalogError::NegativeRating { id: entry.id, rating: entry.rating });
    }
    if entry.price < 0.0 {
        return Err(CatalogError::NegativePrice { id: entry.id, price: entry.price });
    }
    Ok(())
}
