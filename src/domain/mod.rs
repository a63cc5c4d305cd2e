//! Domain layer containing tourism entities and page state.
//!
//! The domain layer has no dependencies on infrastructure or presentation.
//!
//! # Architecture
//!
//! - [`entities`] - Listings, reviews and places
//! - [`sources`] - Remote data source trait definitions
//! - [`search_context`] - Resolved listing sets for one search
//! - [`map_view`] - Bounded map viewport and marker set
//!
//! # Search Flow
//!
//! 1. The page controller receives a search command
//! 2. The previous [`search_context::SearchContext`] and map markers are dropped
//! 3. Each listing kind is resolved independently (remote first, catalog on failure)
//! 4. The new context yields markers for every record with coordinates

pub mod entities;
pub mod map_view;
pub mod search_context;
pub mod sources;
