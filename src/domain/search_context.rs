//! Per-search state: resolved listings and the markers they produce.

use crate::domain::entities::{ListingKind, ListingRecord, Place};
use crate::domain::map_view::Marker;
use serde::Serialize;

/// Where a resolved listing set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Remote,
    Fallback,
}

/// The settled outcome of resolving one listing kind for one city.
///
/// Records are either all remote or all fallback, never mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub kind: ListingKind,
    pub origin: DataOrigin,
    pub records: Vec<ListingRecord>,
}

impl Resolution {
    pub fn remote(kind: ListingKind, records: Vec<ListingRecord>) -> Self {
        Self {
            kind,
            origin: DataOrigin::Remote,
            records,
        }
    }

    pub fn fallback(kind: ListingKind, records: Vec<ListingRecord>) -> Self {
        Self {
            kind,
            origin: DataOrigin::Fallback,
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Everything one search produced.
///
/// Built fresh for each search and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchContext {
    pub city: String,
    pub hotels: Resolution,
    pub attractions: Resolution,
    pub monuments: Resolution,
    pub places: Vec<Place>,
}

impl SearchContext {
    pub fn new(
        city: impl Into<String>,
        hotels: Resolution,
        attractions: Resolution,
        monuments: Resolution,
        places: Vec<Place>,
    ) -> Self {
        Self {
            city: city.into(),
            hotels,
            attractions,
            monuments,
            places,
        }
    }

    /// The three listing sets in page order.
    pub fn resolutions(&self) -> [&Resolution; 3] {
        [&self.hotels, &self.attractions, &self.monuments]
    }

    pub fn resolution(&self, kind: ListingKind) -> &Resolution {
        match kind {
            ListingKind::Hotel => &self.hotels,
            ListingKind::Attraction => &self.attractions,
            ListingKind::Monument => &self.monuments,
        }
    }

    /// True when every listing kind fell back to the catalog.
    pub fn is_fallback_only(&self) -> bool {
        self.resolutions()
            .iter()
            .all(|r| r.origin == DataOrigin::Fallback)
    }

    pub fn total_records(&self) -> usize {
        self.resolutions().iter().map(|r| r.len()).sum()
    }

    /// Markers for every record with coordinates, then every place.
    pub fn markers(&self) -> Vec<Marker> {
        self.resolutions()
            .iter()
            .flat_map(|r| r.records.iter())
            .filter_map(Marker::for_record)
            .chain(self.places.iter().map(Marker::for_place))
            .collect()
    }
}
