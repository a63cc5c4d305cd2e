//! Fetch-or-fallback resolution of listings.

use std::sync::Arc;

use crate::domain::entities::{ListingKind, ListingRecord};
use crate::domain::search_context::{DataOrigin, Resolution};
use crate::domain::sources::ListingSource;
use crate::infrastructure::catalog::StaticCatalog;
use tracing::{debug, warn};

/// Resolves listings from the backend, falling back to the static catalog.
///
/// A resolution is always complete: every failure mode of the remote call
/// (transport error, non-2xx status, malformed body, empty collection)
/// yields the catalog's records for that city and kind. Remote and fallback
/// records are never combined.
pub struct ResolverService<L: ListingSource> {
    source: Arc<L>,
    catalog: Arc<StaticCatalog>,
}

impl<L: ListingSource> ResolverService<L> {
    pub fn new(source: Arc<L>, catalog: Arc<StaticCatalog>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    /// Resolves one listing kind for a city.
    pub async fn resolve(&self, kind: ListingKind, city: &str) -> Resolution {
        match self.source.fetch_listings(kind, city).await {
            Ok(records) if !records.is_empty() => {
                debug!(%kind, city, count = records.len(), "Resolved listings from backend");
                Resolution::remote(kind, records)
            }
            Ok(_) => self.fall_back(kind, city, "empty"),
            Err(e) => {
                warn!(%kind, city, error = %e, "Listing fetch failed, using fallback data");
                self.fall_back(kind, city, e.label())
            }
        }
    }

    /// Resolves hotels, attractions and monuments concurrently.
    ///
    /// Returned in that order. A failure of one kind does not affect the
    /// others.
    pub async fn resolve_all(&self, city: &str) -> [Resolution; 3] {
        let (hotels, attractions, monuments) = tokio::join!(
            self.resolve(ListingKind::Hotel, city),
            self.resolve(ListingKind::Attraction, city),
            self.resolve(ListingKind::Monument, city),
        );
        [hotels, attractions, monuments]
    }

    /// Resolves one listing for its detail page.
    ///
    /// Falls back to the catalog record with the same id, then to a generic
    /// placeholder named after `name`.
    pub async fn resolve_details(
        &self,
        kind: ListingKind,
        id: &str,
        name: Option<&str>,
    ) -> (DataOrigin, ListingRecord) {
        match self.source.fetch_details(kind, id).await {
            Ok(record) => (DataOrigin::Remote, record),
            Err(e) => {
                warn!(%kind, id, error = %e, "Detail fetch failed, using fallback data");
                metrics::counter!("resolver_fallback_total", "kind" => kind.as_str(), "reason" => e.label())
                    .increment(1);
                (DataOrigin::Fallback, self.catalog.details(kind, id, name))
            }
        }
    }

    fn fall_back(&self, kind: ListingKind, city: &str, reason: &'static str) -> Resolution {
        metrics::counter!("resolver_fallback_total", "kind" => kind.as_str(), "reason" => reason)
            .increment(1);
        let records = self.catalog.listings(kind, city);
        debug!(%kind, city, count = records.len(), reason, "Resolved listings from catalog");
        Resolution::fallback(kind, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinates, ListingDetails};
    use crate::domain::sources::{MockListingSource, SourceError};

    fn remote_hotel(id: &str) -> ListingRecord {
        ListingRecord {
            id: id.to_string(),
            name: format!("Remote {id}"),
            rating: 4.2,
            address: None,
            description: None,
            image_urls: Vec::new(),
            coordinates: Coordinates::new(12.97, 77.59),
            details: ListingDetails::Hotel {
                price: Some(4200.0),
                amenities: Vec::new(),
            },
        }
    }

    fn service(mock: MockListingSource) -> ResolverService<MockListingSource> {
        ResolverService::new(Arc::new(mock), Arc::new(StaticCatalog::builtin()))
    }

    #[tokio::test]
    async fn test_resolve_remote_success() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings()
            .withf(|kind, city| *kind == ListingKind::Hotel && city == "Bengaluru")
            .times(1)
            .returning(|_, _| Ok(vec![remote_hotel("b1"), remote_hotel("b2")]));

        let resolution = service(mock).resolve(ListingKind::Hotel, "Bengaluru").await;

        assert_eq!(resolution.origin, DataOrigin::Remote);
        assert_eq!(resolution.len(), 2);
        assert_eq!(resolution.records[0].id, "b1");
    }

    #[tokio::test]
    async fn test_resolve_unreachable_backend_delhi() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings()
            .times(3)
            .returning(|_, _| Err(SourceError::Transport("connection refused".into())));

        let [hotels, attractions, monuments] = service(mock).resolve_all("Delhi").await;

        for r in [&hotels, &attractions, &monuments] {
            assert_eq!(r.origin, DataOrigin::Fallback);
        }
        assert_eq!(hotels.len(), 3);
        assert_eq!(attractions.len(), 3);
        assert_eq!(monuments.len(), 2);
        assert_eq!(hotels.kind, ListingKind::Hotel);
        assert_eq!(monuments.kind, ListingKind::Monument);
    }

    #[tokio::test]
    async fn test_resolve_error_status_falls_back() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings()
            .returning(|_, _| Err(SourceError::Status { status: 500 }));

        let resolution = service(mock).resolve(ListingKind::Monument, "Mumbai").await;

        assert_eq!(resolution.origin, DataOrigin::Fallback);
        assert_eq!(resolution.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_empty_remote_falls_back() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings().returning(|_, _| Ok(Vec::new()));

        let resolution = service(mock).resolve(ListingKind::Attraction, "Delhi").await;

        assert_eq!(resolution.origin, DataOrigin::Fallback);
        assert_eq!(resolution.len(), 3);
    }

    #[tokio::test]
    async fn test_resolve_unknown_city_fallback_is_empty() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings()
            .returning(|_, _| Err(SourceError::Decode("expected array".into())));

        let resolution = service(mock).resolve(ListingKind::Hotel, "Atlantis").await;

        assert_eq!(resolution.origin, DataOrigin::Fallback);
        assert!(resolution.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_never_mixes_sources() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings()
            .returning(|_, _| Ok(vec![remote_hotel("r1")]));

        let resolution = service(mock).resolve(ListingKind::Hotel, "Delhi").await;

        assert_eq!(resolution.origin, DataOrigin::Remote);
        assert_eq!(resolution.len(), 1);
        assert!(resolution.records.iter().all(|r| r.id.starts_with('r')));
    }

    #[tokio::test]
    async fn test_resolve_all_kinds_fail_independently() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_listings().returning(|kind, _| match kind {
            ListingKind::Hotel => Ok(vec![remote_hotel("r1")]),
            _ => Err(SourceError::Empty),
        });

        let [hotels, attractions, monuments] = service(mock).resolve_all("Delhi").await;

        assert_eq!(hotels.origin, DataOrigin::Remote);
        assert_eq!(attractions.origin, DataOrigin::Fallback);
        assert_eq!(monuments.origin, DataOrigin::Fallback);
        assert_eq!(attractions.len(), 3);
    }

    #[tokio::test]
    async fn test_resolve_details_remote() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_details()
            .withf(|kind, id| *kind == ListingKind::Hotel && id == "b1")
            .times(1)
            .returning(|_, id| Ok(remote_hotel(id)));

        let (origin, record) = service(mock)
            .resolve_details(ListingKind::Hotel, "b1", None)
            .await;

        assert_eq!(origin, DataOrigin::Remote);
        assert_eq!(record.name, "Remote b1");
    }

    #[tokio::test]
    async fn test_resolve_details_falls_back_to_catalog_record() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_details()
            .returning(|_, _| Err(SourceError::Status { status: 404 }));

        let (origin, record) = service(mock)
            .resolve_details(ListingKind::Attraction, "delhi-attraction-1", Some("Ignored"))
            .await;

        assert_eq!(origin, DataOrigin::Fallback);
        assert_eq!(record.name, "Red Fort");
    }

    #[tokio::test]
    async fn test_resolve_details_placeholder() {
        let mut mock = MockListingSource::new();
        mock.expect_fetch_details()
            .returning(|_, _| Err(SourceError::Transport("timeout".into())));

        let (origin, record) = service(mock)
            .resolve_details(ListingKind::Hotel, "abc", Some("Sea Breeze"))
            .await;

        assert_eq!(origin, DataOrigin::Fallback);
        assert_eq!(record.id, "abc");
        assert_eq!(record.name, "Sea Breeze");
    }
}
