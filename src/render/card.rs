//! Listing cards.

use askama::Template;
use url::{Position, Url};

use super::RenderOptions;
use super::stars::{StarGlyph, stars};
use crate::domain::entities::{ListingDetails, ListingKind, ListingRecord, VisitingInfo};

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// A labelled line on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Display-ready view of one listing.
///
/// Built by [`Card::new`], which is a pure function of the record and the
/// render options.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub kind: ListingKind,
    pub id: String,
    pub name: String,
    pub stars: [StarGlyph; 5],
    pub rating_text: String,
    pub address: String,
    pub description: String,
    pub image: Option<String>,
    pub gallery: Vec<String>,
    pub facts: Vec<Fact>,
    pub visiting: Vec<Fact>,
    pub amenities: Vec<String>,
    pub directions: String,
    pub href: String,
}

impl Card {
    pub fn new(record: &ListingRecord, options: &RenderOptions) -> Self {
        let currency = options.currency.as_str();

        let (facts, visiting, amenities) = match &record.details {
            ListingDetails::Hotel { price, amenities } => (
                vec![Fact::new("Rents", price_label(*price, currency))],
                Vec::new(),
                amenities.iter().map(|a| a.name.clone()).collect(),
            ),
            ListingDetails::Attraction {
                category,
                visiting_info,
                price_level,
            } => {
                let mut facts = vec![Fact::new(
                    "Rents/Entry",
                    entry_label(visiting_info.as_ref(), *price_level, currency),
                )];
                if let Some(category) = category {
                    facts.push(Fact::new("Category", category.clone()));
                }
                (facts, visiting_facts(visiting_info.as_ref()), Vec::new())
            }
            ListingDetails::Monument {
                built_year,
                architecture,
                visiting_info,
                price_level,
            } => (
                vec![
                    Fact::new(
                        "Rents/Entry",
                        entry_label(visiting_info.as_ref(), *price_level, currency),
                    ),
                    Fact::new("Built", built_year.as_deref().unwrap_or("Unknown")),
                    Fact::new("Architecture", architecture.as_deref().unwrap_or("Unknown")),
                ],
                visiting_facts(visiting_info.as_ref()),
                Vec::new(),
            ),
        };

        let rating = record.display_rating();

        Self {
            kind: record.kind(),
            id: record.id.clone(),
            name: record.name.clone(),
            stars: stars(rating),
            rating_text: format!("{rating}/5"),
            address: record
                .address
                .clone()
                .unwrap_or_else(|| "Address not available".to_string()),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
            image: record.image_urls.first().cloned(),
            gallery: record.image_urls.clone(),
            facts,
            visiting,
            amenities,
            directions: directions_link(record.address.as_deref(), &record.name),
            href: detail_href(record.kind(), &record.id, &record.name),
        }
    }

    pub fn has_directions(&self) -> bool {
        self.directions != "#"
    }
}

/// `"{currency}{amount}/night"`, or `"N/A"` without a price.
pub fn price_label(price: Option<f64>, currency: &str) -> String {
    match price {
        Some(amount) if amount.is_finite() && amount > 0.0 => {
            format!("{currency}{amount}/night")
        }
        _ => "N/A".to_string(),
    }
}

/// The visiting info's entry fee, else the price level as repeated
/// currency glyphs, else `"Free / N/A"`.
pub fn entry_label(info: Option<&VisitingInfo>, price_level: Option<u8>, currency: &str) -> String {
    if let Some(fee) = info
        .and_then(|i| i.entry_fee.as_deref())
        .map(str::trim)
        .filter(|f| !f.is_empty())
    {
        return fee.to_string();
    }

    match price_level {
        Some(level) => {
            let glyphs = currency.repeat(usize::from(level));
            format!("{glyphs} ({level})").trim_start().to_string()
        }
        None => "Free / N/A".to_string(),
    }
}

/// Directions URL to the address, else the name; `"#"` when both are blank.
pub fn directions_link(address: Option<&str>, name: &str) -> String {
    let destination = address
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .or_else(|| Some(name.trim()).filter(|n| !n.is_empty()));

    let Some(destination) = destination else {
        return "#".to_string();
    };

    match Url::parse_with_params(DIRECTIONS_BASE, &[("api", "1"), ("destination", destination)]) {
        Ok(url) => url.into(),
        Err(_) => "#".to_string(),
    }
}

/// Site-relative link to a listing's detail page.
pub fn detail_href(kind: ListingKind, id: &str, name: &str) -> String {
    let Ok(mut url) = Url::parse("http://guide.local/") else {
        return "#".to_string();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().push(kind.as_str()).push(id);
    }
    url.query_pairs_mut().append_pair("name", name);
    url[Position::BeforePath..].to_string()
}

fn visiting_facts(info: Option<&VisitingInfo>) -> Vec<Fact> {
    let Some(info) = info else {
        return Vec::new();
    };
    [
        ("Opening Hours", &info.opening_hours),
        ("Best Time to Visit", &info.best_time),
        ("Parking", &info.parking),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| Fact::new(label, v.clone())))
    .collect()
}

#[derive(Template)]
#[template(path = "partials/card.html")]
struct CardTemplate<'a> {
    card: &'a Card,
}

/// Renders one listing as an HTML card fragment.
pub fn render_card(record: &ListingRecord, options: &RenderOptions) -> askama::Result<String> {
    let card = Card::new(record, options);
    CardTemplate { card: &card }.render()
}
