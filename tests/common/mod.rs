#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tourist_guide::api;
use tourist_guide::api::handlers::health_handler;
use tourist_guide::application::services::PlaceService;
use tourist_guide::infrastructure::{BackendClient, StaticCatalog, TouristProxyPlaces};
use tourist_guide::render::RenderOptions;
use tourist_guide::state::AppState;
use tourist_guide::web;

/// Port 9 (discard) refuses connections on loopback.
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";

/// Reviews the stub backend has accepted.
#[derive(Clone, Default)]
pub struct StubStore {
    pub location: Arc<Mutex<Vec<Value>>>,
    pub listing: Arc<Mutex<Vec<(String, String, Value)>>>,
    pub review_reads: Arc<AtomicUsize>,
}

impl StubStore {
    pub fn location_posts(&self) -> Vec<Value> {
        self.location.lock().unwrap().clone()
    }

    pub fn listing_posts(&self) -> Vec<(String, String, Value)> {
        self.listing.lock().unwrap().clone()
    }

    /// Number of review lists served so far.
    pub fn review_reads(&self) -> usize {
        self.review_reads.load(Ordering::SeqCst)
    }
}

pub fn create_test_state(backend_url: &str) -> AppState {
    let backend = BackendClient::new(backend_url, Duration::from_secs(2)).unwrap();
    let places = PlaceService::new(vec![Arc::new(TouristProxyPlaces::new(backend.clone()))]);

    AppState::new(
        backend,
        places,
        StaticCatalog::builtin(),
        RenderOptions::default(),
    )
}

/// Page, API and health routes without the path-normalizing wrapper.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
}

/// State whose backend refuses every connection.
pub fn unreachable_state() -> AppState {
    create_test_state(UNREACHABLE_BACKEND)
}

/// Serves `router` on an ephemeral loopback port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A backend that knows one hotel in Pune, fails attractions with a 500,
/// has no monuments anywhere, and stores every review posted to it.
pub async fn stub_backend() -> (String, StubStore) {
    let store = StubStore::default();

    let router = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/api/tourist/hotels/{city}", get(stub_hotels))
        .route(
            "/api/tourist/attractions/{city}",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/tourist/monuments/{city}",
            get(|| async { Json(json!([])) }),
        )
        .route("/api/tourist/hotels/details/{id}", get(stub_hotel_details))
        .route("/api/tourist/{city}", get(stub_places))
        .route(
            "/api/reviews",
            axum::routing::post(stub_post_location_review),
        )
        .route("/api/reviews/{city}", get(stub_location_reviews))
        .route(
            "/api/{kind}/{id}/reviews",
            get(stub_listing_reviews).post(stub_post_listing_review),
        )
        .with_state(store.clone());

    (spawn_backend(router).await, store)
}

fn pune_hotel() -> Value {
    json!({
        "id": "pune-stub-1",
        "name": "Stub Grand Pune",
        "rating": 4.2,
        "price": "₹12,000",
        "address": "1 Stub Road, Pune",
        "description": "A stub hotel served by the test backend.",
        "images": ["https://example.com/stub.jpg"],
        "coordinates": [18.52, 73.85],
        "amenities": ["WiFi", { "name": "Pool", "icon": "fa-swimming-pool" }]
    })
}

async fn stub_hotels(Path(city): Path<String>) -> Json<Value> {
    if city.eq_ignore_ascii_case("pune") {
        Json(json!({ "hotels": [pune_hotel()] }))
    } else {
        Json(json!({ "hotels": [] }))
    }
}

async fn stub_hotel_details(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "pune-stub-1" {
        Ok(Json(pune_hotel()))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn stub_places(Path(city): Path<String>) -> Json<Value> {
    if city.eq_ignore_ascii_case("pune") {
        Json(json!({
            "elements": [
                { "lat": 18.519, "lon": 73.855, "tags": { "name": "Shaniwar Wada", "tourism": "attraction" } }
            ]
        }))
    } else {
        Json(json!({ "elements": [] }))
    }
}

fn as_review(body: &Value, text_field: &str) -> Value {
    json!({
        "userName": "Test Visitor",
        "rating": body["rating"],
        "review": body[text_field],
        "createdAt": "2026-01-05T10:00:00Z"
    })
}

async fn stub_post_location_review(
    State(store): State<StubStore>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    store.location.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(json!({ "ok": true })))
}

async fn stub_location_reviews(
    State(store): State<StubStore>,
    Path(city): Path<String>,
) -> Json<Value> {
    store.review_reads.fetch_add(1, Ordering::SeqCst);
    let reviews: Vec<Value> = store
        .location
        .lock()
        .unwrap()
        .iter()
        .filter(|body| body["location"].as_str() == Some(city.as_str()))
        .map(|body| as_review(body, "review"))
        .collect();
    Json(json!({ "reviews": reviews }))
}

async fn stub_post_listing_review(
    State(store): State<StubStore>,
    Path((kind, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    store.listing.lock().unwrap().push((kind, id, body));
    (StatusCode::CREATED, Json(json!({ "ok": true })))
}

async fn stub_listing_reviews(
    State(store): State<StubStore>,
    Path((kind, id)): Path<(String, String)>,
) -> Json<Value> {
    store.review_reads.fetch_add(1, Ordering::SeqCst);
    let reviews: Vec<Value> = store
        .listing
        .lock()
        .unwrap()
        .iter()
        .filter(|(k, i, _)| *k == kind && *i == id)
        .map(|(_, _, body)| as_review(body, "text"))
        .collect();
    Json(json!(reviews))
}
