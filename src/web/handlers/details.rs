//! Detail page handlers for a single hotel, attraction or monument.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use super::view::{
    ReviewForm, ReviewFormView, first_message, review_cards, site_path, template_error,
};
use crate::application::controller::{Command, PageState};
use crate::domain::entities::{ListingKind, ReviewTarget};
use crate::domain::search_context::DataOrigin;
use crate::error::AppError;
use crate::render::card::detail_href;
use crate::render::{Card, ReviewCard, map_json};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub name: Option<String>,
}

/// Template for a detail page.
///
/// Renders `templates/details.html` with the full card, visiting facts,
/// a map centred on the listing and its reviews.
#[derive(Template, WebTemplate)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub card: Card,
    pub fallback: bool,
    pub reviews: Vec<ReviewCard>,
    pub form: ReviewFormView,
    pub map_json: String,
}

/// Parses the `{kind}` path segment; unknown kinds are a 404.
pub fn parse_kind(raw: &str) -> Result<ListingKind, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found("Page not found", json!({ "kind": raw })))
}

fn review_action(kind: ListingKind, id: &str) -> String {
    site_path(&[kind.as_str(), id, "reviews"], None)
}

fn clean_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

async fn render_details(
    state: &AppState,
    kind: ListingKind,
    id: &str,
    name: Option<String>,
    mut form: ReviewFormView,
) -> Result<DetailsTemplate, AppError> {
    let mut page = state.page();
    page.dispatch(Command::OpenDetails {
        kind,
        id: id.to_string(),
        name: name.clone(),
    })
    .await?;

    let name = name.or_else(|| page.detail().map(|d| d.record.name.clone()));
    page.dispatch(Command::LoadReviews {
        target: ReviewTarget::listing(kind, id, name.clone()),
    })
    .await?;

    let PageState {
        detail,
        reviews,
        map,
        ..
    } = page.into_parts();
    let detail = detail.ok_or_else(|| {
        AppError::internal("Listing could not be resolved", json!({ "id": id }))
    })?;

    if form.name.is_none() {
        form.name = name;
    }

    Ok(DetailsTemplate {
        card: Card::new(&detail.record, &state.render),
        fallback: detail.origin == DataOrigin::Fallback,
        reviews: review_cards(&reviews),
        form,
        map_json: map_json(&map).map_err(template_error)?,
    })
}

/// Renders one listing.
///
/// # Endpoint
///
/// `GET /{kind}/{id}?name={name}`
///
/// `kind` is `hotel`, `attraction` or `monument` (plurals accepted). When
/// the backend has no record the catalog entry with the same id is shown,
/// else a generic placeholder titled `name`.
pub async fn details_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
) -> Result<DetailsTemplate, AppError> {
    let kind = parse_kind(&kind)?;
    let form = ReviewFormView::new(review_action(kind, &id), None);
    render_details(&state, kind, &id, clean_name(query.name), form).await
}

/// Publishes a review of one listing.
///
/// # Endpoint
///
/// `POST /{kind}/{id}/reviews` (form: `rating`, `review`, `name`)
///
/// # Response
///
/// - **303 See Other** back to the detail page on success
/// - **400 / 502** with the page re-rendered and the error shown
pub async fn details_review_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Form(form): Form<ReviewForm>,
) -> Result<Response, AppError> {
    let kind = parse_kind(&kind)?;
    let name = clean_name(form.name.clone());

    let failure = match form.validate() {
        Err(errors) => Some((StatusCode::BAD_REQUEST, first_message(&errors))),
        Ok(()) => {
            let mut page = state.page();
            page.dispatch(Command::PublishReview {
                target: ReviewTarget::listing(kind, id.clone(), name.clone()),
                draft: form.draft(),
            })
            .await
            .err()
            .map(|e| (e.status(), e.message().to_string()))
        }
    };

    match failure {
        None => {
            let target = format!(
                "{}#reviews",
                detail_href(kind, &id, name.as_deref().unwrap_or_default())
            );
            Ok(Redirect::to(&target).into_response())
        }
        Some((status, message)) => {
            let view = ReviewFormView::new(review_action(kind, &id), name.clone())
                .with_error(message, &form);
            let page = render_details(&state, kind, &id, name, view).await?;
            Ok((status, page).into_response())
        }
    }
}
