//! Derived detail view.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use crate::selection::Selection;

/// Entry the shell should show in its detail panel, if any.
///
/// Holds no state. Call it on every render: a selected id that is missing
/// from `catalog` flattens to `None`, exactly like no selection.
#[must_use]
pub fn detail_for<'a>(catalog: &'a Catalog, selection: &Selection) -> Option<&'a CatalogEntry> {
    selection.current().and_then(|id| catalog.find(id))
}
