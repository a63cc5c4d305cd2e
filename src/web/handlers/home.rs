//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;

use super::view::{Featured, featured, template_error};
use crate::domain::map_view::MapView;
use crate::error::AppError;
use crate::render::map_json;

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - Search box (in the shared header)
/// - Map of India with no markers
/// - Shortcuts to popular cities
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub map_json: String,
    pub error: Option<String>,
    pub featured: Vec<Featured>,
}

impl IndexTemplate {
    pub fn new(error: Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            map_json: map_json(&MapView::india()).map_err(template_error)?,
            error,
            featured: featured(),
        })
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Result<IndexTemplate, AppError> {
    IndexTemplate::new(None)
}
