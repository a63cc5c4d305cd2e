//! Data source trait definitions for the domain layer.
//!
//! These traits abstract the remote backend and the public places services.
//! Concrete implementations live in `crate::infrastructure`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Sources
//!
//! - [`ListingSource`] - Hotel/attraction/monument collections and details
//! - [`ReviewSource`] - Reading and posting reviews
//! - [`PlaceSource`] - Points of interest for map markers
//!
//! Every call reports failure through [`SourceError`]; callers decide whether
//! to fall back.

mod error;
pub mod listing_source;
pub mod place_source;
pub mod review_source;

pub use error::{SourceError, SourceResult};
pub use listing_source::ListingSource;
pub use place_source::PlaceSource;
pub use review_source::ReviewSource;

#[cfg(test)]
pub use listing_source::MockListingSource;
#[cfg(test)]
pub use place_source::MockPlaceSource;
#[cfg(test)]
pub use review_source::MockReviewSource;
