//! Handler for JSON listing details.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::details::DetailsResponse;
use crate::application::controller::{Command, PageState};
use crate::error::AppError;
use crate::render::directions_link;
use crate::state::AppState;
use crate::web::handlers::{DetailQuery, parse_kind};

/// Resolves one listing.
///
/// # Endpoint
///
/// `GET /api/{kind}/{id}?name={name}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown kind. An unreachable backend yields
/// the catalog record or a placeholder with `"origin": "fallback"`.
pub async fn details_json_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<DetailsResponse>, AppError> {
    let kind = parse_kind(&kind)?;

    let mut page = state.page();
    page.dispatch(Command::OpenDetails {
        kind,
        id: id.clone(),
        name: query.name,
    })
    .await?;

    let PageState { detail, .. } = page.into_parts();
    let detail = detail.ok_or_else(|| {
        AppError::internal("Listing could not be resolved", json!({ "id": id }))
    })?;

    Ok(Json(DetailsResponse {
        origin: detail.origin,
        directions: directions_link(detail.record.address.as_deref(), &detail.record.name),
        record: detail.record,
    }))
}
