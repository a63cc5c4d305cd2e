//! HTTP request handlers for API endpoints.

pub mod details;
pub mod health;
pub mod search;

pub use details::details_json_handler;
pub use health::health_handler;
pub use search::search_json_handler;
