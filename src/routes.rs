//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Home page with the India map
//! - `GET  /search?city=`           - Results for a city
//! - `GET  /location/{city}`        - Location page with city reviews
//! - `GET  /{kind}/{id}`            - Detail page for one listing
//! - `POST .../reviews`             - Review submission (form)
//! - `GET  /health`                 - Health check: backend, catalog, place sources
//! - `/api/*`                       - JSON API
//! - `/static/*`                    - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `/health` and `/api` are registered before the page routes' `/{kind}/{id}`
/// capture; axum prefers static segments, so neither is shadowed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
