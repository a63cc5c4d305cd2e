//! Source trait for reviews.

use crate::domain::entities::{Review, ReviewTarget};
use crate::domain::sources::SourceResult;
use async_trait::async_trait;

/// Remote store of reviews for cities and listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Lists reviews for a target, newest first as the backend orders them.
    ///
    /// An empty list is a valid answer here, not an error.
    async fn fetch_reviews(&self, target: &ReviewTarget) -> SourceResult<Vec<Review>>;

    /// Publishes one review. Inputs are already validated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::sources::SourceError::Status`] when the
    /// backend rejects the write.
    async fn post_review(&self, target: &ReviewTarget, rating: u8, text: &str)
    -> SourceResult<()>;
}
