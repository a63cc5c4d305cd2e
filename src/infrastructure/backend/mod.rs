//! Tourist backend integration.
//!
//! [`BackendClient`] implements the listing and review sources over HTTP.
//! [`TouristProxyPlaces`] and [`PlacesProxy`] wrap the backend's two
//! places endpoints. Wire shapes and their decoders live in [`wire`].

pub mod client;
pub mod wire;

pub use client::{BackendClient, PlacesProxy, TouristProxyPlaces};
