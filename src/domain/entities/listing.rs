//! Listing entities: hotels, attractions and monuments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three kinds of listing a city page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Hotel,
    Attraction,
    Monument,
}

impl ListingKind {
    /// All kinds in page order.
    pub const ALL: [ListingKind; 3] = [
        ListingKind::Hotel,
        ListingKind::Attraction,
        ListingKind::Monument,
    ];

    /// Singular name, used in review endpoints (`/api/hotel/{id}/reviews`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Hotel => "hotel",
            ListingKind::Attraction => "attraction",
            ListingKind::Monument => "monument",
        }
    }

    /// Plural name, used as the collection key and path segment
    /// (`/api/tourist/hotels/{city}` → `{"hotels": [...]}`).
    pub fn plural(&self) -> &'static str {
        match self {
            ListingKind::Hotel => "hotels",
            ListingKind::Attraction => "attractions",
            ListingKind::Monument => "monuments",
        }
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            ListingKind::Hotel => "Hotels",
            ListingKind::Attraction => "Attractions",
            ListingKind::Monument => "Monuments",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a path segment is not a listing kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ListingKind {
    type Err = UnknownKind;

    /// Accepts both singular and plural forms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hotel" | "hotels" => Ok(ListingKind::Hotel),
            "attraction" | "attractions" => Ok(ListingKind::Attraction),
            "monument" | "monuments" => Ok(ListingKind::Monument),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }
}

/// An amenity offered by a hotel, with an optional icon class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub icon: Option<String>,
}

impl Amenity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }
}

/// Practical information for visiting an attraction or monument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitingInfo {
    pub opening_hours: Option<String>,
    pub entry_fee: Option<String>,
    pub best_time: Option<String>,
    pub parking: Option<String>,
}

impl VisitingInfo {
    pub fn is_empty(&self) -> bool {
        self.opening_hours.is_none()
            && self.entry_fee.is_none()
            && self.best_time.is_none()
            && self.parking.is_none()
    }
}

/// Kind-specific fields of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingDetails {
    Hotel {
        /// Nightly rate in whole currency units.
        price: Option<f64>,
        amenities: Vec<Amenity>,
    },
    Attraction {
        category: Option<String>,
        visiting_info: Option<VisitingInfo>,
        price_level: Option<u8>,
    },
    Monument {
        built_year: Option<String>,
        architecture: Option<String>,
        visiting_info: Option<VisitingInfo>,
        price_level: Option<u8>,
    },
}

impl ListingDetails {
    pub fn kind(&self) -> ListingKind {
        match self {
            ListingDetails::Hotel { .. } => ListingKind::Hotel,
            ListingDetails::Attraction { .. } => ListingKind::Attraction,
            ListingDetails::Monument { .. } => ListingKind::Monument,
        }
    }
}

/// A hotel, attraction or monument as shown on a card.
///
/// Read-only view model. `rating` is stored as received; consumers clamp it
/// with [`ListingRecord::display_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub address: Option<String>,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub details: ListingDetails,
}

impl ListingRecord {
    pub fn kind(&self) -> ListingKind {
        self.details.kind()
    }

    /// Rating clamped to `[0, 5]`; NaN reads as 0.
    pub fn display_rating(&self) -> f64 {
        clamp_rating(self.rating)
    }
}

/// Clamps a rating into `[0, 5]`, mapping NaN to 0.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, 5.0)
    }
}
