//! HTTP client for the tourist backend.

use super::wire::{self, ListingReviewBody, LocationReviewBody};
use crate::domain::entities::{ListingKind, ListingRecord, Place, Review, ReviewTarget};
use crate::domain::sources::{ListingSource, PlaceSource, ReviewSource, SourceError, SourceResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the backend's `/api/...` endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Self::with_client(http, base_url)
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot serve as a base for API paths.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).with_context(|| format!("Invalid backend URL: {base_url}"))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!("Backend URL must be an http(s) URL, got '{base_url}'");
        }
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds `{base}/seg1/seg2/...`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get_json(&self, url: Url) -> SourceResult<Value> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> SourceResult<()> {
        debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SourceError::Status {
                status: status.as_u16(),
            })
        }
    }

    /// Checks that the backend answers HTTP at all.
    ///
    /// Any response, including an error status, counts as reachable.
    pub async fn ping(&self) -> SourceResult<u16> {
        let response = self
            .http
            .get(self.base.clone())
            .send()
            .await
            .map_err(transport)?;
        Ok(response.status().as_u16())
    }
}

/// Maps a reqwest failure onto the source taxonomy.
pub(crate) fn transport(e: reqwest::Error) -> SourceError {
    if e.is_decode() {
        SourceError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
        SourceError::Status {
            status: status.as_u16(),
        }
    } else {
        SourceError::Transport(e.to_string())
    }
}

#[async_trait]
impl ListingSource for BackendClient {
    async fn fetch_listings(
        &self,
        kind: ListingKind,
        city: &str,
    ) -> SourceResult<Vec<ListingRecord>> {
        let url = self.endpoint(&["api", "tourist", kind.plural(), city.trim()]);
        let body = self.get_json(url).await?;

        let records = wire::decode_listings(kind, body);
        if records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(records)
    }

    async fn fetch_details(&self, kind: ListingKind, id: &str) -> SourceResult<ListingRecord> {
        let url = self.endpoint(&["api", "tourist", kind.plural(), "details", id]);
        let body = self.get_json(url).await?;
        wire::decode_record(kind, body).map_err(SourceError::Decode)
    }
}

#[async_trait]
impl ReviewSource for BackendClient {
    async fn fetch_reviews(&self, target: &ReviewTarget) -> SourceResult<Vec<Review>> {
        let url = match target {
            ReviewTarget::Location { city } => self.endpoint(&["api", "reviews", city.trim()]),
            ReviewTarget::Listing { kind, id, .. } => {
                self.endpoint(&["api", kind.as_str(), id, "reviews"])
            }
        };
        let body = self.get_json(url).await?;
        Ok(wire::decode_reviews(body))
    }

    async fn post_review(
        &self,
        target: &ReviewTarget,
        rating: u8,
        text: &str,
    ) -> SourceResult<()> {
        match target {
            ReviewTarget::Location { city } => {
                let body = LocationReviewBody {
                    location: city.trim(),
                    rating,
                    review: text,
                };
                self.post_json(self.endpoint(&["api", "reviews"]), &body).await
            }
            ReviewTarget::Listing { kind, id, name } => {
                let body = ListingReviewBody { rating, text };
                self.post_json(self.endpoint(&["api", kind.as_str(), id, "reviews"]), &body)
                    .await?;

                // Mirror onto the location feed; its outcome does not affect the submission.
                let mirror = LocationReviewBody {
                    location: name.as_deref().unwrap_or("Unknown"),
                    rating,
                    review: text,
                };
                if let Err(e) = self.post_json(self.endpoint(&["api", "reviews"]), &mirror).await {
                    warn!(error = %e, "Failed to mirror review onto location feed");
                }
                Ok(())
            }
        }
    }
}

/// Places from the backend's Overpass proxy (`GET /api/tourist/{city}`).
#[derive(Clone, Debug)]
pub struct TouristProxyPlaces {
    client: BackendClient,
}

impl TouristProxyPlaces {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlaceSource for TouristProxyPlaces {
    fn name(&self) -> &'static str {
        "backend-tourist-proxy"
    }

    async fn search_places(&self, city: &str) -> SourceResult<Vec<Place>> {
        let url = self.client.endpoint(&["api", "tourist", city.trim()]);
        let body = self.client.get_json(url).await?;
        Ok(wire::decode_overpass(body))
    }
}

/// Places from the backend's text-search proxy
/// (`GET /api/places/attractions/{city}`).
#[derive(Clone, Debug)]
pub struct PlacesProxy {
    client: BackendClient,
}

impl PlacesProxy {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlaceSource for PlacesProxy {
    fn name(&self) -> &'static str {
        "backend-places-proxy"
    }

    async fn search_places(&self, city: &str) -> SourceResult<Vec<Place>> {
        let url = self
            .client
            .endpoint(&["api", "places", "attractions", city.trim()]);
        let body = self.client.get_json(url).await?;
        Ok(wire::decode_text_search(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let c = client("http://localhost:8082");
        let url = c.endpoint(&["api", "tourist", "hotels", "New Delhi"]);
        assert_eq!(url.as_str(), "http://localhost:8082/api/tourist/hotels/New%20Delhi");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("http://gateway.local/backend/");
        let url = c.endpoint(&["api", "reviews", "a/b"]);
        assert_eq!(url.as_str(), "http://gateway.local/backend/api/reviews/a%2Fb");
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(BackendClient::new("ftp://example.com", Duration::from_secs(1)).is_err());
        assert!(BackendClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(BackendClient::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) is closed on test machines.
        let c = client("http://127.0.0.1:9");
        let err = c
            .fetch_listings(ListingKind::Hotel, "Delhi")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Transport(_)));
    }
}
