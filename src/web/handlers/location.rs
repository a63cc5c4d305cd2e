//! Location page handlers: listings by kind plus city reviews.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use super::view::{
    ReviewForm, ReviewFormView, Section, first_message, location_href, review_cards, sections,
    site_path, template_error,
};
use crate::application::controller::{Command, PageState};
use crate::domain::entities::ReviewTarget;
use crate::error::AppError;
use crate::render::{ReviewCard, map_json};
use crate::state::AppState;

/// Template for the location page.
///
/// Renders `templates/location.html` with one tab per listing kind and a
/// reviews tab holding the submission form.
#[derive(Template, WebTemplate)]
#[template(path = "location.html")]
pub struct LocationTemplate {
    pub city: String,
    pub sections: Vec<Section>,
    pub reviews: Vec<ReviewCard>,
    pub form: ReviewFormView,
    pub map_json: String,
}

fn review_action(city: &str) -> String {
    site_path(&["location", city.trim(), "reviews"], None)
}

async fn render_location(
    state: &AppState,
    city: &str,
    form: ReviewFormView,
) -> Result<LocationTemplate, AppError> {
    let mut page = state.page();
    page.dispatch(Command::Search {
        city: city.to_string(),
    })
    .await?;
    page.dispatch(Command::LoadReviews {
        target: ReviewTarget::location(city.trim()),
    })
    .await?;

    let PageState {
        context,
        reviews,
        map,
        ..
    } = page.into_parts();
    let context = context.ok_or_else(|| {
        AppError::internal("Search produced no results", json!({ "city": city }))
    })?;

    Ok(LocationTemplate {
        sections: sections(&context, &state.render),
        reviews: review_cards(&reviews),
        form,
        map_json: map_json(&map).map_err(template_error)?,
        city: context.city,
    })
}

/// Renders a city's listings and reviews.
///
/// # Endpoint
///
/// `GET /location/{city}`
pub async fn location_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<LocationTemplate, AppError> {
    let form = ReviewFormView::new(review_action(&city), None);
    render_location(&state, &city, form).await
}

/// Publishes a city review.
///
/// # Endpoint
///
/// `POST /location/{city}/reviews` (form: `rating`, `review`)
///
/// # Response
///
/// - **303 See Other** back to the reviews tab on success
/// - **400 / 502** with the page re-rendered, the input kept and the error
///   shown above the form
pub async fn location_review_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Response, AppError> {
    let failure = match form.validate() {
        Err(errors) => Some((StatusCode::BAD_REQUEST, first_message(&errors))),
        Ok(()) => {
            let mut page = state.page();
            page.dispatch(Command::PublishReview {
                target: ReviewTarget::location(city.trim()),
                draft: form.draft(),
            })
            .await
            .err()
            .map(|e| (e.status(), e.message().to_string()))
        }
    };

    match failure {
        None => {
            let target = format!("{}#reviews", location_href(&city));
            Ok(Redirect::to(&target).into_response())
        }
        Some((status, message)) => {
            let view = ReviewFormView::new(review_action(&city), None).with_error(message, &form);
            let page = render_location(&state, &city, view).await?;
            Ok((status, page).into_response())
        }
    }
}
