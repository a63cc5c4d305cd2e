//! Direct client for a public Overpass interpreter.

use crate::domain::entities::Place;
use crate::domain::sources::{PlaceSource, SourceError, SourceResult};
use crate::infrastructure::backend::client::transport;
use crate::infrastructure::backend::wire;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Queries `tourism=attraction` features inside a city's administrative area.
#[derive(Clone, Debug)]
pub struct OverpassClient {
    http: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// # Errors
    ///
    /// Returns an error for an unparsable endpoint or when the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid Overpass URL: {endpoint}"))?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Overpass QL selecting attraction nodes, ways and relations in `city`.
///
/// Ways and relations are reduced to their centre point by `out center`.
pub fn attraction_query(city: &str) -> String {
    let city = city.trim().replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        "[out:json][timeout:25];\n\
         area[\"name\"=\"{city}\"][\"boundary\"=\"administrative\"]->.searchArea;\n\
         (\n  \
           node[\"tourism\"=\"attraction\"](area.searchArea);\n  \
           way[\"tourism\"=\"attraction\"](area.searchArea);\n  \
           relation[\"tourism\"=\"attraction\"](area.searchArea);\n\
         );\n\
         out center;"
    )
}

#[async_trait]
impl PlaceSource for OverpassClient {
    fn name(&self) -> &'static str {
        "overpass"
    }

    async fn search_places(&self, city: &str) -> SourceResult<Vec<Place>> {
        let query = attraction_query(city);
        debug!(endpoint = %self.endpoint, "POST overpass query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(wire::decode_overpass(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names_city_and_tourism_filters() {
        let q = attraction_query("  Jaipur ");
        assert!(q.starts_with("[out:json][timeout:25];"));
        assert!(q.contains("area[\"name\"=\"Jaipur\"][\"boundary\"=\"administrative\"]"));
        assert!(q.contains("node[\"tourism\"=\"attraction\"](area.searchArea);"));
        assert!(q.contains("way[\"tourism\"=\"attraction\"](area.searchArea);"));
        assert!(q.contains("relation[\"tourism\"=\"attraction\"](area.searchArea);"));
        assert!(q.ends_with("out center;"));
    }

    #[test]
    fn test_query_escapes_quotes() {
        let q = attraction_query("Foo\"];out;");
        assert!(q.contains("\"name\"=\"Foo\\\"];out;\""));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        assert!(OverpassClient::new("::nope", Duration::from_secs(1)).is_err());
    }
}
