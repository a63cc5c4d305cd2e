mod common;

use axum_test::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_details_from_catalog_when_backend_down() {
    let server = TestServer::new(common::app(common::unreachable_state())).unwrap();

    let response = server.get("/monument/delhi-monument-1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Qutub Minar"));
    assert!(html.contains("Showing sample details"));
    assert!(html.contains("Architecture"));
    assert!(html.contains("action=\"/monument/delhi-monument-1/reviews\""));
}

#[tokio::test]
async fn test_details_placeholder_uses_query_name() {
    let server = TestServer::new(common::app(common::unreachable_state())).unwrap();

    let response = server
        .get("/hotel/unknown-99")
        .add_query_param("name", "Stub Inn")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>Stub Inn</h1>"));
    assert!(html.contains("Showing sample details"));
}

#[tokio::test]
async fn test_details_unknown_kind_is_not_found() {
    let server = TestServer::new(common::app(common::unreachable_state())).unwrap();

    let response = server.get("/castle/1").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_details_from_backend() {
    let (backend_url, _store) = common::stub_backend().await;
    let server = TestServer::new(common::app(common::create_test_state(&backend_url))).unwrap();

    let response = server.get("/hotel/pune-stub-1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Stub Grand Pune"));
    assert!(html.contains("₹12000/night"));
    assert!(html.contains("WiFi"));
    assert!(html.contains("https://www.google.com/maps/dir/"));
    assert!(!html.contains("Showing sample details"));
}

#[tokio::test]
async fn test_api_details_reports_fallback_origin() {
    let server = TestServer::new(common::app(common::unreachable_state())).unwrap();

    let response = server.get("/api/monument/delhi-monument-1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["origin"], "fallback");
    assert_eq!(json["record"]["name"], "Qutub Minar");
    assert!(
        json["directions"]
            .as_str()
            .unwrap()
            .starts_with("https://www.google.com/maps/dir/?api=1&destination=")
    );
}

#[tokio::test]
async fn test_api_details_accepts_plural_kind() {
    let (backend_url, _store) = common::stub_backend().await;
    let server = TestServer::new(common::app(common::create_test_state(&backend_url))).unwrap();

    let response = server.get("/api/hotels/pune-stub-1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["origin"], "remote");
    assert_eq!(json["record"]["id"], "pune-stub-1");
    assert_eq!(json["record"]["details"]["kind"], "hotel");
    assert_eq!(json["record"]["details"]["price"], 12000.0);
}
