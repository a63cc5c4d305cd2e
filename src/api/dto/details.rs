//! DTOs for a single listing.

use serde::Serialize;

use crate::domain::entities::ListingRecord;
use crate::domain::search_context::DataOrigin;

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub origin: DataOrigin,
    pub record: ListingRecord,
    /// Google Maps directions URL, or `#` when there is nothing to route to.
    pub directions: String,
}
