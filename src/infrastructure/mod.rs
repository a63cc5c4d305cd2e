//! Infrastructure layer for external integrations.
//!
//! This layer implements the source traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the tourist backend
//! - [`catalog`] - Built-in fallback records
//! - [`overpass`] - Direct Overpass interpreter client

pub mod backend;
pub mod catalog;
pub mod overpass;

pub use backend::{BackendClient, PlacesProxy, TouristProxyPlaces};
pub use catalog::StaticCatalog;
pub use overpass::OverpassClient;
