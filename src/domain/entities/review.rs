//! Review entities and submission input.

use crate::domain::entities::ListingKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published review of a city or a single listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author_name: String,
    /// Integer rating in `1..=5`.
    pub rating: u8,
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// What a review is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum ReviewTarget {
    /// City-level aggregate shown on the location page.
    Location { city: String },
    /// A single hotel, attraction or monument on its detail page.
    Listing {
        kind: ListingKind,
        id: String,
        /// Listing name, used to mirror the review onto the location feed.
        name: Option<String>,
    },
}

impl ReviewTarget {
    pub fn location(city: impl Into<String>) -> Self {
        Self::Location { city: city.into() }
    }

    pub fn listing(kind: ListingKind, id: impl Into<String>, name: Option<String>) -> Self {
        Self::Listing {
            kind,
            id: id.into(),
            name,
        }
    }
}

/// User input for a new review, before validation.
///
/// Both fields come straight from a form: the rating may be missing and the
/// text may be blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: Option<u8>,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(rating: Option<u8>, text: impl Into<String>) -> Self {
        Self {
            rating,
            text: text.into(),
        }
    }

    /// Returns the rating and trimmed text when both are present.
    ///
    /// A rating of zero counts as missing, matching an unselected form field.
    pub fn complete(&self) -> Option<(u8, &str)> {
        let rating = self.rating.filter(|r| *r > 0)?;
        let text = self.text.trim();
        (!text.is_empty()).then_some((rating, text))
    }
}
