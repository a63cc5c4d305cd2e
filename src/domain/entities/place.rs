//! Points of interest returned by the places search.

use crate::domain::entities::Coordinates;
use serde::{Deserialize, Serialize};

/// A named point of interest used only to place map markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub coordinates: Coordinates,
}

impl Place {
    pub const UNNAMED: &'static str = "Unnamed";
    pub const DEFAULT_CATEGORY: &'static str = "Tourist Spot";

    /// Builds a place, substituting defaults for a missing name or category.
    pub fn new(name: Option<String>, category: Option<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| Self::UNNAMED.to_string()),
            category: category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_CATEGORY.to_string()),
            coordinates,
        }
    }
}
