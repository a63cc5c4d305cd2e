//! Server-rendered pages.
//!
//! Uses Askama templates from `templates/`; every page embeds its map state
//! as JSON for `static/js/map.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and their view models
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
