//! Static fallback catalog.
//!
//! Hard-coded sample records keyed by city, served when the backend is
//! unreachable or has nothing for a city. Lookups never touch the network.

mod data;

use crate::domain::entities::{ListingDetails, ListingKind, ListingRecord, VisitingInfo};

/// Sample records for one city.
#[derive(Debug, Clone)]
pub struct CityEntry {
    /// Lowercase match key; a search matches when its normalized city contains it.
    pub key: &'static str,
    pub hotels: Vec<ListingRecord>,
    pub attractions: Vec<ListingRecord>,
    pub monuments: Vec<ListingRecord>,
}

impl CityEntry {
    pub fn records(&self, kind: ListingKind) -> &[ListingRecord] {
        match kind {
            ListingKind::Hotel => &self.hotels,
            ListingKind::Attraction => &self.attractions,
            ListingKind::Monument => &self.monuments,
        }
    }
}

/// In-memory city → sample records mapping.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    cities: Vec<CityEntry>,
}

impl StaticCatalog {
    pub fn new(cities: Vec<CityEntry>) -> Self {
        Self { cities }
    }

    /// The catalog shipped with the service (Delhi and Mumbai).
    pub fn builtin() -> Self {
        Self::new(vec![data::delhi(), data::mumbai()])
    }

    /// An empty catalog; every lookup misses.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Finds the entry for a city name.
    ///
    /// Matching is case-insensitive and substring-based, so "New Delhi"
    /// matches the `delhi` entry.
    pub fn city(&self, city: &str) -> Option<&CityEntry> {
        let normalized = city.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|entry| normalized.contains(entry.key))
    }

    /// Sample records of one kind for a city; empty for unknown cities.
    pub fn listings(&self, kind: ListingKind, city: &str) -> Vec<ListingRecord> {
        self.city(city)
            .map(|entry| entry.records(kind).to_vec())
            .unwrap_or_default()
    }

    /// Finds a sample record by id across every city.
    pub fn find(&self, kind: ListingKind, id: &str) -> Option<ListingRecord> {
        self.cities
            .iter()
            .flat_map(|entry| entry.records(kind))
            .find(|record| record.id == id)
            .cloned()
    }

    /// Keys of every city the catalog knows.
    pub fn city_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cities.iter().map(|entry| entry.key)
    }

    /// Detail fallback: the sample record with this id, or a generic
    /// placeholder named after `name`.
    pub fn details(&self, kind: ListingKind, id: &str, name: Option<&str>) -> ListingRecord {
        self.find(kind, id)
            .unwrap_or_else(|| placeholder(kind, id, name))
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Generic record shown on a detail page when nothing is known about the id.
fn placeholder(kind: ListingKind, id: &str, name: Option<&str>) -> ListingRecord {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let generic = match kind {
                ListingKind::Hotel => "Hotel",
                ListingKind::Attraction => "Attraction",
                ListingKind::Monument => "Monument",
            };
            generic.to_string()
        });

    let (description, photo, details) = match kind {
        ListingKind::Hotel => (
            "A wonderful hotel with great amenities and excellent service.",
            "1566073771259-6a8506099945",
            ListingDetails::Hotel {
                price: Some(8000.0),
                amenities: Vec::new(),
            },
        ),
        ListingKind::Attraction => (
            "A wonderful attraction with great historical and cultural significance.",
            "1524492412937-b28074a5d7da",
            ListingDetails::Attraction {
                category: Some("Tourist Spot".to_string()),
                visiting_info: Some(VisitingInfo {
                    opening_hours: Some("9:00 AM - 5:00 PM".to_string()),
                    entry_fee: Some("₹30 for adults".to_string()),
                    best_time: Some("All year round".to_string()),
                    parking: Some("Available".to_string()),
                }),
                price_level: None,
            },
        ),
        ListingKind::Monument => (
            "A significant historical monument with great architectural and cultural importance.",
            "1587474265384-2d1eef2878f5",
            ListingDetails::Monument {
                built_year: None,
                architecture: Some("Traditional".to_string()),
                visiting_info: None,
                price_level: None,
            },
        ),
    };

    ListingRecord {
        id: id.to_string(),
        name,
        rating: 4.0,
        address: None,
        description: Some(description.to_string()),
        image_urls: vec![format!("https://images.unsplash.com/photo-{photo}?w=600")],
        coordinates: None,
        details,
    }
}
