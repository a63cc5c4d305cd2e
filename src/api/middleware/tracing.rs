//! Request spans for the guide.
//!
//! Every page and API request gets a span carrying the method, the path and,
//! when the request names one, the city being explored:
//!
//! ```text
//! INFO request{method=GET path=/search city=Delhi}: finished status=200 latency_ms=12
//! INFO request{method=POST path=/location/Pune/reviews city=Pune}: finished status=303 latency_ms=40
//! ```
//!
//! Stylesheets, scripts and images under `/static` are traced at `DEBUG` so a
//! single page load does not bury its own log line.

use std::time::Duration;

use axum::http::{Request, Response, Uri};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer};
use tracing::{Level, Span, field};
use url::Url;

pub type GuideTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, ResponseLog>;

pub fn layer() -> GuideTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(ResponseLog)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let method = request.method();
        let path = request.uri().path();

        if is_asset(path) {
            return tracing::debug_span!("request", %method, %path);
        }

        let span = tracing::info_span!("request", %method, %path, city = field::Empty);
        if let Some(city) = city_of(request.uri()) {
            span.record("city", city.as_str());
        }
        span
    }
}

/// Logs the outcome at the level of the request's span.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLog;

impl<B> OnResponse<B> for ResponseLog {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();
        let latency_ms = latency.as_millis() as u64;

        match span.metadata().map(|m| *m.level()) {
            Some(Level::INFO) => tracing::info!(status, latency_ms, "finished"),
            _ => tracing::debug!(status, latency_ms, "finished"),
        }
    }
}

pub fn is_asset(path: &str) -> bool {
    path.starts_with("/static/") || path == "/favicon.ico"
}

/// City named by a request, from `?city=`, `/location/{city}` or
/// `/api/search/{city}`.
pub fn city_of(uri: &Uri) -> Option<String> {
    let url = Url::parse("http://guide.local/").ok()?.join(&uri.to_string()).ok()?;

    let from_query = url
        .query_pairs()
        .find(|(key, _)| key == "city")
        .map(|(_, value)| value.trim().to_string());

    let from_path = || {
        let segments: Vec<&str> = url.path_segments()?.collect();
        let city = match segments.as_slice() {
            ["location", city, ..] | ["api", "search", city, ..] => *city,
            _ => return None,
        };
        let decoded: String = url::form_urlencoded::parse(city.as_bytes())
            .map(|(key, _)| key.into_owned())
            .next()?;
        Some(decoded.trim().to_string())
    };

    from_query
        .or_else(from_path)
        .filter(|city| !city.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_city_from_query() {
        assert_eq!(city_of(&uri("/search?city=New+Delhi")), Some("New Delhi".into()));
        assert_eq!(city_of(&uri("/search?city=%20%20")), None);
        assert_eq!(city_of(&uri("/search")), None);
    }

    #[test]
    fn test_city_from_path() {
        assert_eq!(city_of(&uri("/location/Pune")), Some("Pune".into()));
        assert_eq!(city_of(&uri("/location/New%20Delhi/reviews")), Some("New Delhi".into()));
        assert_eq!(city_of(&uri("/api/search/Goa")), Some("Goa".into()));
        assert_eq!(city_of(&uri("/hotel/h1?name=Sea+Breeze")), None);
        assert_eq!(city_of(&uri("/health")), None);
    }

    #[test]
    fn test_assets_are_recognised() {
        assert!(is_asset("/static/js/nav.js"));
        assert!(is_asset("/favicon.ico"));
        assert!(!is_asset("/search"));
        assert!(!is_asset("/staticky"));
    }

    #[test]
    fn test_request_span_levels() {
        let page = Request::get("/location/Pune").body(()).unwrap();
        let asset = Request::get("/static/css/site.css").body(()).unwrap();

        tracing::subscriber::with_default(
            tracing_subscriber::fmt().with_max_level(Level::TRACE).finish(),
            || {
                let page_span = RequestSpan.make_span(&page);
                let asset_span = RequestSpan.make_span(&asset);
                assert_eq!(page_span.metadata().map(|m| *m.level()), Some(Level::INFO));
                assert_eq!(asset_span.metadata().map(|m| *m.level()), Some(Level::DEBUG));
            },
        );
    }
}
