//! DTOs for city search.

use serde::Serialize;

use crate::domain::entities::Place;
use crate::domain::map_view::MapView;
use crate::domain::search_context::{Resolution, SearchContext};

/// Everything one search resolved, plus the map it produced.
///
/// Each listing set carries its own `origin` (`remote` or `fallback`).
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub city: String,
    pub total: usize,
    pub fallback_only: bool,
    pub hotels: Resolution,
    pub attractions: Resolution,
    pub monuments: Resolution,
    pub places: Vec<Place>,
    pub map: MapView,
}

impl SearchResponse {
    pub fn new(context: SearchContext, map: MapView) -> Self {
        Self {
            total: context.total_records(),
            fallback_only: context.is_fallback_only(),
            city: context.city,
            hotels: context.hotels,
            attractions: context.attractions,
            monuments: context.monuments,
            places: context.places,
            map,
        }
    }
}
