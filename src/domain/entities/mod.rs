//! Core domain entities representing the tourism data model.
//!
//! Entities are read-only view models; nothing here owns persistence.
//!
//! # Entity Types
//!
//! - [`ListingRecord`] - A hotel, attraction or monument, with kind-specific [`ListingDetails`]
//! - [`Review`] - A review of a city or a listing
//! - [`Place`] - A point of interest used for map markers
//!
//! Input for new reviews lives in [`ReviewDraft`].

pub mod listing;
pub mod place;
pub mod review;

pub use listing::{
    Amenity, Coordinates, ListingDetails, ListingKind, ListingRecord, UnknownKind, VisitingInfo,
    clamp_rating,
};
pub use place::Place;
pub use review::{Review, ReviewDraft, ReviewTarget};
