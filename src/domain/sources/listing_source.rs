//! Source trait for listing collections and details.

use crate::domain::entities::{ListingKind, ListingRecord};
use crate::domain::sources::SourceResult;
use async_trait::async_trait;

/// Remote provider of hotels, attractions and monuments.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::BackendClient`] - HTTP backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches every listing of `kind` for a city.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::sources::SourceError::Empty`] when the
    /// collection decodes but holds no records, and the other variants for
    /// transport, status and decode failures.
    async fn fetch_listings(&self, kind: ListingKind, city: &str)
    -> SourceResult<Vec<ListingRecord>>;

    /// Fetches one listing by its id.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ListingSource::fetch_listings`].
    async fn fetch_details(&self, kind: ListingKind, id: &str) -> SourceResult<ListingRecord>;
}
