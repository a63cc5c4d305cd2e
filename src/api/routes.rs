//! API route configuration.

use crate::api::handlers::{details_json_handler, search_json_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /search/{city}` - Resolved listings, places and map state for a city
/// - `GET /{kind}/{id}`   - One listing with its data origin
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search/{city}", get(search_json_handler))
        .route("/{kind}/{id}", get(details_json_handler))
}
