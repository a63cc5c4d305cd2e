//! HTML page handlers.

mod details;
mod home;
mod location;
mod search;
pub mod view;

pub use details::{DetailQuery, details_handler, details_review_handler, parse_kind};
pub use home::home_handler;
pub use location::{location_handler, location_review_handler};
pub use search::search_handler;
