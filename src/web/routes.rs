//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    details_handler, details_review_handler, home_handler, location_handler,
    location_review_handler, search_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Home page with search box and map
/// - `GET /search?city=` - Results for a city
/// - `GET /location/{city}` - Listings by kind plus city reviews
/// - `POST /location/{city}/reviews` - Publish a city review
/// - `GET /{kind}/{id}` - One hotel, attraction or monument
/// - `POST /{kind}/{id}/reviews` - Publish a listing review
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/search", get(search_handler))
        .route("/location/{city}", get(location_handler))
        .route("/location/{city}/reviews", post(location_review_handler))
        .route("/{kind}/{id}", get(details_handler))
        .route("/{kind}/{id}/reviews", post(details_review_handler))
}
