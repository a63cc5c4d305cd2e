//! Application layer services implementing the guide's behaviour.
//!
//! Services consume the source traits from [`crate::domain::sources`] and
//! provide a fallback-aware API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::ResolverService`] - Listings from the backend or the static catalog
//! - [`services::ReviewService`] - Review listing and validated submission
//! - [`services::PlaceService`] - Ordered chain of place sources for map markers
//! - [`controller::PageController`] - Command dispatch over one page's state

pub mod controller;
pub mod services;
