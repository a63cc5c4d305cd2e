//! Points of interest for map markers.

use std::sync::Arc;

use crate::domain::entities::Place;
use crate::domain::sources::PlaceSource;
use tracing::{debug, warn};

/// Tries each place source in order; the first non-empty answer wins.
#[derive(Clone, Default)]
pub struct PlaceService {
    sources: Vec<Arc<dyn PlaceSource>>,
}

impl PlaceService {
    pub fn new(sources: Vec<Arc<dyn PlaceSource>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Places in `city`, or none when every source fails or comes back empty.
    pub async fn search(&self, city: &str) -> Vec<Place> {
        for source in &self.sources {
            match source.search_places(city).await {
                Ok(places) if !places.is_empty() => {
                    debug!(source = source.name(), city, count = places.len(), "Found places");
                    return places;
                }
                Ok(_) => debug!(source = source.name(), city, "No places, trying next source"),
                Err(e) => {
                    warn!(source = source.name(), city, error = %e, "Place source failed");
                }
            }
        }
        Vec::new()
    }
}
