//! Wire formats of the backend and places services.
//!
//! Remote records arrive in loose shapes: prices as strings or numbers,
//! `image` or `images`, amenities as plain strings or `{name, icon}`,
//! coordinates as a pair, an object or flat fields. Everything is decoded
//! into lenient DTOs here and validated into domain types before it leaves
//! this module. Records that cannot be validated are dropped.

use crate::domain::entities::{
    Amenity, Coordinates, ListingDetails, ListingKind, ListingRecord, Place, Review, VisitingInfo,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

/// A JSON value that may be sent as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value; text is read after dropping currency symbols and
    /// thousands separators (`"₹25,000"` → `25000`).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.is_finite().then_some(*n),
            Scalar::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Text form; whole numbers print without a fractional part.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 => Some(format!("{n:.0}")),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Text(s) => non_blank(Some(s.clone())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinatesDto {
    Pair([f64; 2]),
    Object {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
}

impl CoordinatesDto {
    fn validate(&self) -> Option<Coordinates> {
        match *self {
            CoordinatesDto::Pair([lat, lng]) => Coordinates::new(lat, lng),
            CoordinatesDto::Object { lat, lng } => Coordinates::new(lat, lng),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDto {
    pub location: Option<CoordinatesDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmenityDto {
    Name(String),
    Full { name: String, icon: Option<String> },
}

impl AmenityDto {
    fn validate(self) -> Option<Amenity> {
        let (name, icon) = match self {
            AmenityDto::Name(name) => (name, None),
            AmenityDto::Full { name, icon } => (name, icon),
        };
        let name = non_blank(Some(name))?;
        Some(Amenity {
            name,
            icon: non_blank(icon),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitingInfoDto {
    pub opening_hours: Option<String>,
    pub entry_fee: Option<String>,
    pub best_time: Option<String>,
    pub parking: Option<String>,
}

impl VisitingInfoDto {
    fn validate(self) -> Option<VisitingInfo> {
        let info = VisitingInfo {
            opening_hours: non_blank(self.opening_hours),
            entry_fee: non_blank(self.entry_fee),
            best_time: non_blank(self.best_time),
            parking: non_blank(self.parking),
        };
        (!info.is_empty()).then_some(info)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalInfoDto {
    pub built_year: Option<Scalar>,
    pub architecture: Option<String>,
}

/// One listing as the backend sends it.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDto {
    pub id: Option<Scalar>,
    #[serde(rename = "place_id")]
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub rating: Option<Scalar>,
    #[serde(alias = "formatted_address")]
    pub address: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub images: Vec<String>,
    pub coordinates: Option<CoordinatesDto>,
    pub geometry: Option<GeometryDto>,
    pub lat: Option<f64>,
    #[serde(alias = "lon")]
    pub lng: Option<f64>,
    pub price: Option<Scalar>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub amenities: Vec<AmenityDto>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub visiting_info: Option<VisitingInfoDto>,
    #[serde(rename = "price_level", alias = "priceLevel")]
    pub price_level: Option<u8>,
    pub built_year: Option<Scalar>,
    pub architecture: Option<String>,
    pub historical_info: Option<HistoricalInfoDto>,
}

impl RecordDto {
    /// Validates into a domain record of `kind`.
    ///
    /// Returns `None` when the id or the name is missing.
    pub fn validate(self, kind: ListingKind) -> Option<ListingRecord> {
        let id = self
            .id
            .as_ref()
            .and_then(Scalar::as_text)
            .or_else(|| non_blank(self.place_id.clone()))?;
        let name = non_blank(self.name)?;

        let coordinates = self
            .coordinates
            .as_ref()
            .and_then(CoordinatesDto::validate)
            .or_else(|| {
                self.geometry
                    .as_ref()
                    .and_then(|g| g.location.as_ref())
                    .and_then(CoordinatesDto::validate)
            })
            .or_else(|| match (self.lat, self.lng) {
                (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
                _ => None,
            });

        let mut image_urls: Vec<String> = self
            .images
            .into_iter()
            .filter_map(|url| non_blank(Some(url)))
            .collect();
        if image_urls.is_empty()
            && let Some(url) = non_blank(self.image)
        {
            image_urls.push(url);
        }

        let historical = self.historical_info.unwrap_or_default();
        let visiting_info = self.visiting_info.and_then(VisitingInfoDto::validate);

        let details = match kind {
            ListingKind::Hotel => ListingDetails::Hotel {
                price: self
                    .price
                    .as_ref()
                    .and_then(Scalar::as_f64)
                    .filter(|p| *p > 0.0),
                amenities: self
                    .amenities
                    .into_iter()
                    .filter_map(AmenityDto::validate)
                    .collect(),
            },
            ListingKind::Attraction => ListingDetails::Attraction {
                category: non_blank(self.category),
                visiting_info,
                price_level: self.price_level,
            },
            ListingKind::Monument => ListingDetails::Monument {
                built_year: self
                    .built_year
                    .or(historical.built_year)
                    .as_ref()
                    .and_then(Scalar::as_text),
                architecture: non_blank(self.architecture).or(non_blank(historical.architecture)),
                visiting_info,
                price_level: self.price_level,
            },
        };

        Some(ListingRecord {
            id,
            name,
            rating: self.rating.as_ref().and_then(Scalar::as_f64).unwrap_or(0.0),
            address: non_blank(self.address),
            description: non_blank(self.description),
            image_urls,
            coordinates,
            details,
        })
    }
}

/// Decodes a collection response (`{"hotels": [...]}` or a bare array).
///
/// Elements that fail to decode or validate are skipped.
pub fn decode_listings(kind: ListingKind, body: Value) -> Vec<ListingRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(kind.plural()) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RecordDto>(item).ok())
        .filter_map(|dto| dto.validate(kind))
        .collect()
}

/// Decodes a single record response.
pub fn decode_record(kind: ListingKind, body: Value) -> Result<ListingRecord, String> {
    let dto: RecordDto = serde_json::from_value(body).map_err(|e| e.to_string())?;
    dto.validate(kind)
        .ok_or_else(|| "record is missing an id or a name".to_string())
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDto {
    pub name: Option<String>,
}

/// One review as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub user_name: Option<String>,
    pub author: Option<AuthorDto>,
    pub rating: Option<Scalar>,
    pub review: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<Scalar>,
    pub date: Option<String>,
}

impl ReviewDto {
    /// Validates into a domain review; `None` without a 1–5 rating or text.
    pub fn validate(self) -> Option<Review> {
        let rating = self.rating.as_ref().and_then(Scalar::as_f64)?.round();
        if !(1.0..=5.0).contains(&rating) {
            return None;
        }
        let text = non_blank(self.review).or_else(|| non_blank(self.text))?;
        let author_name = non_blank(self.user_name)
            .or_else(|| self.author.and_then(|a| non_blank(a.name)))
            .unwrap_or_else(|| "Anonymous".to_string());
        let timestamp = self
            .created_at
            .as_ref()
            .and_then(parse_timestamp)
            .or_else(|| self.date.map(Scalar::Text).as_ref().and_then(parse_timestamp));

        Some(Review {
            author_name,
            rating: rating as u8,
            text,
            timestamp,
        })
    }
}

/// Decodes `{"reviews": [...]}` or a bare array of reviews.
pub fn decode_reviews(body: Value) -> Vec<Review> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("reviews") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ReviewDto>(item).ok())
        .filter_map(ReviewDto::validate)
        .collect()
}

/// Accepts RFC 3339, a plain `YYYY-MM-DD` date, or epoch seconds.
fn parse_timestamp(value: &Scalar) -> Option<DateTime<Utc>> {
    match value {
        Scalar::Number(secs) => {
            let whole = secs.trunc();
            let nanos = ((secs - whole) * 1e9).round() as u32;
            DateTime::from_timestamp(whole as i64, nanos)
        }
        Scalar::Text(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                })
        }
    }
}

/// Body of `POST /api/reviews`.
#[derive(Debug, Clone, Serialize)]
pub struct LocationReviewBody<'a> {
    pub location: &'a str,
    pub rating: u8,
    pub review: &'a str,
}

/// Body of `POST /api/{kind}/{id}/reviews`.
#[derive(Debug, Clone, Serialize)]
pub struct ListingReviewBody<'a> {
    pub rating: u8,
    pub text: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassTags {
    pub name: Option<String>,
    pub tourism: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<CoordinatesDto>,
    #[serde(default)]
    pub tags: OverpassTags,
}

/// Decodes an Overpass `{"elements": [...]}` answer.
///
/// Nodes carry `lat`/`lon`; ways and relations carry a `center`.
pub fn decode_overpass(body: Value) -> Vec<Place> {
    let elements = match body {
        Value::Object(mut map) => match map.remove("elements") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    elements
        .into_iter()
        .filter_map(|item| serde_json::from_value::<OverpassElement>(item).ok())
        .filter_map(|el| {
            let coordinates = match (el.lat, el.lon) {
                (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
                _ => el.center.as_ref().and_then(CoordinatesDto::validate),
            }?;
            Some(Place::new(el.tags.name, el.tags.tourism, coordinates))
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResult {
    pub name: Option<String>,
    pub geometry: Option<GeometryDto>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Decodes a places text-search `{"results": [...]}` answer.
pub fn decode_text_search(body: Value) -> Vec<Place> {
    let results = match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    results
        .into_iter()
        .filter_map(|item| serde_json::from_value::<TextSearchResult>(item).ok())
        .filter_map(|r| {
            let coordinates = r
                .geometry
                .as_ref()
                .and_then(|g| g.location.as_ref())
                .and_then(CoordinatesDto::validate)?;
            let category = r.types.into_iter().next().map(|t| t.replace('_', " "));
            Some(Place::new(r.name, category, coordinates))
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
