//! Handler for JSON city search.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::search::SearchResponse;
use crate::application::controller::{Command, PageState};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::view::SearchQuery;

/// Resolves every listing kind and the places for a city.
///
/// # Endpoint
///
/// `GET /api/search/{city}`
///
/// # Response
///
/// ```json
/// {
///   "city": "Delhi",
///   "total": 8,
///   "fallback_only": true,
///   "hotels": { "kind": "hotel", "origin": "fallback", "records": [...] },
///   "attractions": { ... },
///   "monuments": { ... },
///   "places": [],
///   "map": { "max_bounds": ..., "viewport": ..., "markers": [...] }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a blank or malformed city name. Backend
/// failures never surface here; they fall back to the catalog.
pub async fn search_json_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = SearchQuery {
        city: city.trim().to_string(),
    };
    if query.city.is_empty() {
        return Err(AppError::bad_request(
            "Please enter a city name",
            json!({ "field": "city" }),
        ));
    }
    query.validate()?;

    let mut page = state.page();
    page.dispatch(Command::Search {
        city: query.city.clone(),
    })
    .await?;

    let PageState { context, map, .. } = page.into_parts();
    let context = context.ok_or_else(|| {
        AppError::internal("Search produced no results", json!({ "city": query.city }))
    })?;

    Ok(Json(SearchResponse::new(context, map)))
}
