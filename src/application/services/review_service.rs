//! Review listing and submission.

use std::sync::Arc;

use crate::domain::entities::{Review, ReviewDraft, ReviewTarget};
use crate::domain::sources::ReviewSource;
use crate::error::AppError;
use serde_json::json;
use tracing::{info, warn};

/// Service for reading and publishing reviews.
pub struct ReviewService<R: ReviewSource> {
    source: Arc<R>,
}

impl<R: ReviewSource> ReviewService<R> {
    pub fn new(source: Arc<R>) -> Self {
        Self { source }
    }

    /// Lists the reviews for a target.
    ///
    /// A failed fetch is logged and yields an empty list.
    pub async fn list(&self, target: &ReviewTarget) -> Vec<Review> {
        match self.source.fetch_reviews(target).await {
            Ok(reviews) => reviews,
            Err(e) => {
                warn!(?target, error = %e, "Review fetch failed, showing none");
                Vec::new()
            }
        }
    }

    /// Publishes a review. The list is not reloaded here; callers that
    /// stay on the page follow up with [`ReviewService::list`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] without contacting the backend when
    /// the rating or text is missing, or the rating is outside `1..=5`.
    ///
    /// Returns [`AppError::Upstream`] when the backend rejects the write.
    pub async fn submit(
        &self,
        target: &ReviewTarget,
        draft: &ReviewDraft,
    ) -> Result<(), AppError> {
        let Some((rating, text)) = draft.complete() else {
            record_outcome("invalid");
            return Err(AppError::bad_request(
                "Please provide both a rating and a review",
                json!({ "rating": draft.rating, "text_empty": draft.text.trim().is_empty() }),
            ));
        };

        if !(1..=5).contains(&rating) {
            record_outcome("invalid");
            return Err(AppError::bad_request(
                "Rating must be between 1 and 5",
                json!({ "rating": rating }),
            ));
        }

        if let Err(e) = self.source.post_review(target, rating, text).await {
            warn!(?target, error = %e, "Review submission failed");
            record_outcome("failed");
            return Err(AppError::upstream(
                "Failed to submit review. Please try again.",
                json!({ "reason": e.label(), "message": e.to_string() }),
            ));
        }

        info!(?target, rating, "Review submitted");
        record_outcome("accepted");
        Ok(())
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("review_submissions_total", "outcome" => outcome).increment(1);
}
