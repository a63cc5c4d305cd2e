//! Business logic services for the application layer.

pub mod place_service;
pub mod resolver_service;
pub mod review_service;

pub use place_service::PlaceService;
pub use resolver_service::ResolverService;
pub use review_service::ReviewService;
