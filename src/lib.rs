//! # Tourist Guide
//!
//! A city tourism guide built with Axum and Askama: hotels, attractions and
//! monuments on a Leaflet map, with visitor reviews.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Listings, reviews, places, map state and source traits
//! - **Application Layer** ([`application`]) - Fetch-or-fallback resolution and the page controller
//! - **Infrastructure Layer** ([`infrastructure`]) - Backend and Overpass clients, static catalog
//! - **Render Layer** ([`render`]) - Cards, stars and map JSON
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs and tracing middleware
//! - **Web Layer** ([`web`]) - HTML pages and review forms
//!
//! ## Features
//!
//! - Every listing kind resolves independently: backend data when present,
//!   else the built-in catalog for the city
//! - Attraction markers from the backend proxies or Overpass directly
//! - Map pinned to India's bounding box
//! - City and listing reviews
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="http://localhost:8082"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::controller::{Command, Outcome, PageController};
    pub use crate::application::services::{PlaceService, ResolverService, ReviewService};
    pub use crate::domain::entities::{ListingKind, ListingRecord, Place, Review, ReviewTarget};
    pub use crate::domain::search_context::{DataOrigin, Resolution, SearchContext};
    pub use crate::error::AppError;
    pub use crate::infrastructure::{BackendClient, StaticCatalog};
    pub use crate::state::AppState;
}
