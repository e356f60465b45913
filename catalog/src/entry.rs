//! Entry record types shared by every catalog section.
//!
//! Tourist sites, marketplace items and AR experiences all share one shape;
//! the variant is carried in [`EntryKind`] rather than in separate structs so
//! lookup and selection treat them uniformly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, opaque identifier of a catalog entry.
///
/// Unique within one catalog and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Which section of the site an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Tourist site shown on the map overlay.
    Site,
    /// Handicraft or souvenir listed in the marketplace.
    Marketplace,
    /// AR/VR experience shown in the experience browser.
    Experience,
}

impl EntryKind {
    /// Human-readable section label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Site => "Tourist site",
            Self::Marketplace => "Marketplace",
            Self::Experience => "AR experience",
        }
    }
}

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub name: String,
    pub description: String,
    /// Conventionally in `[0.0, 5.0]`; never negative.
    pub rating: f64,
    /// Never negative. Zero means free.
    pub price: f64,
    /// URL or path of the representative image. Not validated.
    pub media: String,
    /// Short display labels, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where the entry sits on the map, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl CatalogEntry {
    /// Minimal entry with empty description, media and tags.
    #[must_use]
    pub fn new(id: u32, kind: EntryKind, name: impl Into<String>, rating: f64, price: f64) -> Self {
        Self {
            id: EntryId(id),
            kind,
            name: name.into(),
            description: String::new(),
            rating,
            price,
            media: String::new(),
            tags: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint { lat, lon });
        self
    }
}
