//! View models shared by the page handlers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use url::{Position, Url};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{Review, ReviewDraft};
use crate::domain::search_context::{DataOrigin, SearchContext};
use crate::error::AppError;
use crate::render::{Card, RenderOptions, ReviewCard};

/// Letters, marks, spaces and the punctuation found in place names.
pub static CITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\s.,'()-]+$").unwrap());

/// Cities offered as shortcuts on the home page.
pub const FEATURED_CITIES: [&str; 6] = ["Delhi", "Mumbai", "Jaipur", "Agra", "Goa", "Varanasi"];

/// One listing kind's cards on a results or location page.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub anchor: &'static str,
    pub fallback: bool,
    pub cards: Vec<Card>,
}

pub fn sections(context: &SearchContext, options: &RenderOptions) -> Vec<Section> {
    context
        .resolutions()
        .into_iter()
        .map(|resolution| Section {
            title: resolution.kind.title(),
            anchor: resolution.kind.plural(),
            fallback: resolution.origin == DataOrigin::Fallback,
            cards: resolution
                .records
                .iter()
                .map(|record| Card::new(record, options))
                .collect(),
        })
        .collect()
}

/// Maps a template failure onto an internal error.
pub fn template_error(e: askama::Error) -> AppError {
    AppError::internal("Failed to render page", json!({ "reason": e.to_string() }))
}

pub fn review_cards(reviews: &[Review]) -> Vec<ReviewCard> {
    reviews.iter().map(ReviewCard::new).collect()
}

#[derive(Debug, Clone)]
pub struct Featured {
    pub name: &'static str,
    pub href: String,
}

pub fn featured() -> Vec<Featured> {
    FEATURED_CITIES
        .into_iter()
        .map(|name| Featured {
            name,
            href: search_href(name),
        })
        .collect()
}

pub fn search_href(city: &str) -> String {
    site_path(&["search"], Some(("city", city)))
}

pub fn location_href(city: &str) -> String {
    site_path(&["location", city.trim()], None)
}

/// Site-relative path with percent-encoded segments.
pub fn site_path(segments: &[&str], query: Option<(&str, &str)>) -> String {
    let Ok(mut url) = Url::parse("http://guide.local/") else {
        return "/".to_string();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    if let Some((key, value)) = query {
        url.query_pairs_mut().append_pair(key, value);
    }
    url[Position::BeforePath..].to_string()
}

/// `GET /search` query string.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    #[validate(
        length(max = 100, message = "City name is too long"),
        regex(
            path = "*CITY_REGEX",
            message = "City names may only contain letters, spaces and punctuation"
        )
    )]
    pub city: String,
}

/// Review form body. An unselected rating arrives as an empty string.
///
/// The rating stays text until validation so a tampered value such as
/// `abc` or `300` is answered on the page instead of failing extraction.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReviewForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(custom(function = "validate_rating"))]
    pub rating: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Reviews are limited to 2000 characters"))]
    pub review: String,

    /// Listing name, carried along so the mirror post and the redirect keep it.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

impl ReviewForm {
    /// The rating as a star count, when it is one.
    pub fn rating(&self) -> Option<u8> {
        self.rating.as_deref().and_then(parse_rating)
    }

    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft::new(self.rating(), self.review.clone())
    }
}

fn parse_rating(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
}

fn validate_rating(raw: &str) -> Result<(), ValidationError> {
    match parse_rating(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("rating")
            .with_message(Cow::Borrowed("Rating must be between 1 and 5"))),
    }
}

/// First human-readable message in a set of validation errors.
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

#[derive(Debug, Clone)]
pub struct RatingOption {
    pub value: u8,
    pub label: &'static str,
    pub selected: bool,
}

/// State of the review form on a page.
#[derive(Debug, Clone, Default)]
pub struct ReviewFormView {
    pub action: String,
    pub name: Option<String>,
    pub error: Option<String>,
    pub rating: Option<u8>,
    pub text: String,
}

impl ReviewFormView {
    pub fn new(action: String, name: Option<String>) -> Self {
        Self {
            action,
            name,
            ..Default::default()
        }
    }

    /// Keeps the user's input and shows `error` above the form.
    pub fn with_error(mut self, error: impl Into<String>, form: &ReviewForm) -> Self {
        self.error = Some(error.into());
        self.rating = form.rating();
        self.text = form.review.clone();
        self
    }

    pub fn rating_options(&self) -> Vec<RatingOption> {
        const LABELS: [&str; 5] = [
            "1 - Poor",
            "2 - Fair",
            "3 - Good",
            "4 - Very Good",
            "5 - Excellent",
        ];
        (1..=5u8)
            .zip(LABELS)
            .map(|(value, label)| RatingOption {
                value,
                label,
                selected: self.rating == Some(value),
            })
            .collect()
    }
}
