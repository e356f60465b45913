//! Catalog and selection model for the Wanderlens tourism demo.
//!
//! This crate holds the only structured logic behind the site: an immutable,
//! ordered catalog of experience records (tourist sites, marketplace items,
//! AR experiences) and the single optional selection that the rendering shell
//! reads to decide which tooltip or detail modal to show. Everything here is
//! pure and synchronous; the `client` crate owns all rendering.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`entry`] | Entry record types ([`entry::CatalogEntry`], [`entry::EntryId`], [`entry::GeoPoint`]) |
//! | [`catalog`] | Validated, immutable [`catalog::Catalog`] and id lookup |
//! | [`selection`] | [`selection::Selection`] controller and the [`selection::Interaction`] events routed to it |
//! | [`focus`] | Hover + pin [`focus::Focus`] for tooltip surfaces |
//! | [`detail`] | Derived detail view: selection + catalog to optional entry |
//! | [`map`] | Projection of entry coordinates onto the map overlay |
//! | [`itinerary`] | Day-by-day itinerary referencing catalog ids |
//! | [`language`] | Display-language label toggle |
//! | [`seed`] | Embedded sample data |

pub mod catalog;
pub mod detail;
pub mod entry;
pub mod focus;
pub mod itinerary;
pub mod language;
pub mod map;
pub mod seed;
pub mod selection;

pub use catalog::{Catalog, CatalogError, find};
pub use detail::detail_for;
pub use entry::{CatalogEntry, EntryId, EntryKind, GeoPoint};
pub use focus::Focus;
pub use selection::{Interaction, Selection};
