//! Search results page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use super::home::IndexTemplate;
use super::view::{SearchQuery, Section, first_message, location_href, sections, template_error};
use crate::application::controller::{Command, PageState};
use crate::domain::entities::Place;
use crate::error::AppError;
use crate::render::map_json;
use crate::state::AppState;

/// Template for the results page.
///
/// Renders `templates/search.html` with the three listing sections, the
/// extra places and a map holding a marker for each.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub city: String,
    pub title: String,
    pub fallback_only: bool,
    pub sections: Vec<Section>,
    pub places: Vec<Place>,
    pub location_href: String,
    pub map_json: String,
}

/// Resolves a city and renders its results.
///
/// # Endpoint
///
/// `GET /search?city={city}`
///
/// A blank or malformed city re-renders the home page with a message and
/// status 400.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let city = query.city.trim().to_string();
    if city.is_empty() {
        let page = IndexTemplate::new(Some("Please enter a city name".to_string()))?;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }
    if let Err(errors) = query.validate() {
        let page = IndexTemplate::new(Some(first_message(&errors)))?;
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    let mut page = state.page();
    page.dispatch(Command::Search { city: city.clone() }).await?;

    let PageState { context, map, .. } = page.into_parts();
    let context = context.ok_or_else(|| {
        AppError::internal("Search produced no results", json!({ "city": city }))
    })?;

    let title = if context.places.is_empty() {
        format!("Discover amazing places in \"{city}\":")
    } else {
        format!("Tourist attractions in \"{city}\":")
    };

    Ok(SearchTemplate {
        title,
        fallback_only: context.is_fallback_only(),
        sections: sections(&context, &state.render),
        location_href: location_href(&city),
        map_json: map_json(&map).map_err(template_error)?,
        places: context.places,
        city,
    }
    .into_response())
}
