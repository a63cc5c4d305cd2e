//! Command dispatch over one page's state.
//!
//! A [`PageController`] owns what a single page shows: the current
//! [`SearchContext`], the [`MapView`] and the loaded reviews. Every user
//! action is a [`Command`]; `dispatch` takes `&mut self`, so a controller
//! handles one command at a time.

use std::sync::Arc;

use crate::application::services::{PlaceService, ResolverService, ReviewService};
use crate::domain::entities::{ListingKind, ListingRecord, Review, ReviewDraft, ReviewTarget};
use crate::domain::map_view::{MapView, Marker};
use crate::domain::search_context::{DataOrigin, SearchContext};
use crate::domain::sources::{ListingSource, ReviewSource};
use crate::error::AppError;
use serde_json::json;
use tracing::info;

/// Zoom used when a detail page centres on its listing.
pub const DETAIL_ZOOM: u8 = 15;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve every listing kind and the places for a city.
    Search { city: String },
    /// Resolve one listing for its detail page.
    OpenDetails {
        kind: ListingKind,
        id: String,
        name: Option<String>,
    },
    LoadReviews { target: ReviewTarget },
    /// Publish a review, then reload the target's reviews.
    SubmitReview {
        target: ReviewTarget,
        draft: ReviewDraft,
    },
    /// Publish a review without reloading. For callers that leave the page
    /// right after, such as a form post answered with a redirect.
    PublishReview {
        target: ReviewTarget,
        draft: ReviewDraft,
    },
}

/// What a successful command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Searched { city: String, total: usize },
    DetailsOpened { origin: DataOrigin },
    ReviewsLoaded { count: usize },
    ReviewPublished,
}

/// The listing shown on a detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub origin: DataOrigin,
    pub record: ListingRecord,
}

pub struct PageController<L: ListingSource, R: ReviewSource> {
    resolver: Arc<ResolverService<L>>,
    reviews: Arc<ReviewService<R>>,
    places: Arc<PlaceService>,
    context: Option<SearchContext>,
    detail: Option<DetailView>,
    loaded_reviews: Vec<Review>,
    map: MapView,
}

impl<L: ListingSource, R: ReviewSource> PageController<L, R> {
    pub fn new(
        resolver: Arc<ResolverService<L>>,
        reviews: Arc<ReviewService<R>>,
        places: Arc<PlaceService>,
    ) -> Self {
        Self {
            resolver,
            reviews,
            places,
            context: None,
            detail: None,
            loaded_reviews: Vec::new(),
            map: MapView::india(),
        }
    }

    /// Handles one command.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank search or an incomplete
    /// review, and [`AppError::Upstream`] when a review cannot be published.
    /// On error the state from before the command is kept, except that a
    /// search has already cleared the previous results.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, AppError> {
        match command {
            Command::Search { city } => self.search(&city).await,
            Command::OpenDetails { kind, id, name } => {
                Ok(self.open_details(kind, &id, name.as_deref()).await)
            }
            Command::LoadReviews { target } => {
                self.loaded_reviews = self.reviews.list(&target).await;
                Ok(Outcome::ReviewsLoaded {
                    count: self.loaded_reviews.len(),
                })
            }
            Command::SubmitReview { target, draft } => {
                self.reviews.submit(&target, &draft).await?;
                self.loaded_reviews = self.reviews.list(&target).await;
                Ok(Outcome::ReviewsLoaded {
                    count: self.loaded_reviews.len(),
                })
            }
            Command::PublishReview { target, draft } => {
                self.reviews.submit(&target, &draft).await?;
                Ok(Outcome::ReviewPublished)
            }
        }
    }

    async fn search(&mut self, city: &str) -> Result<Outcome, AppError> {
        self.map.clear_markers();
        self.context = None;

        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::bad_request(
                "Please enter a city name",
                json!({ "field": "city" }),
            ));
        }

        let ([hotels, attractions, monuments], places) =
            tokio::join!(self.resolver.resolve_all(city), self.places.search(city));

        let context = SearchContext::new(city, hotels, attractions, monuments, places);
        self.map.set_markers(context.markers());

        let total = context.total_records();
        info!(
            city,
            total,
            places = context.places.len(),
            fallback_only = context.is_fallback_only(),
            "Search resolved"
        );
        self.context = Some(context);

        Ok(Outcome::Searched {
            city: city.to_string(),
            total,
        })
    }

    async fn open_details(&mut self, kind: ListingKind, id: &str, name: Option<&str>) -> Outcome {
        let (origin, record) = self.resolver.resolve_details(kind, id, name).await;

        match Marker::for_record(&record) {
            Some(marker) => {
                let position = marker.position;
                self.map.set_markers([marker]);
                self.map.focus(position, DETAIL_ZOOM);
            }
            None => self.map.clear_markers(),
        }

        self.detail = Some(DetailView { origin, record });
        Outcome::DetailsOpened { origin }
    }

    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.loaded_reviews
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Takes the page state apart for rendering.
    pub fn into_parts(self) -> PageState {
        PageState {
            context: self.context,
            detail: self.detail,
            reviews: self.loaded_reviews,
            map: self.map,
        }
    }
}

/// Owned page state after the controller is done.
#[derive(Debug, Clone)]
pub struct PageState {
    pub context: Option<SearchContext>,
    pub detail: Option<DetailView>,
    pub reviews: Vec<Review>,
    pub map: MapView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinates, ListingDetails};
    use crate::domain::map_view::Viewport;
    use crate::domain::sources::{MockListingSource, MockReviewSource, SourceError};
    use crate::infrastructure::catalog::StaticCatalog;

    fn hotel(id: &str, lat: f64, lng: f64) -> ListingRecord {
        ListingRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            rating: 4.0,
            address: Some("MG Road".to_string()),
            description: None,
            image_urls: Vec::new(),
            coordinates: Coordinates::new(lat, lng),
            details: ListingDetails::Hotel {
                price: None,
                amenities: Vec::new(),
            },
        }
    }

    fn controller(
        listings: MockListingSource,
        reviews: MockReviewSource,
    ) -> PageController<MockListingSource, MockReviewSource> {
        PageController::new(
            Arc::new(ResolverService::new(
                Arc::new(listings),
                Arc::new(StaticCatalog::builtin()),
            )),
            Arc::new(ReviewService::new(Arc::new(reviews))),
            Arc::new(PlaceService::default()),
        )
    }

    #[tokio::test]
    async fn test_search_replaces_previous_markers() {
        let mut listings = MockListingSource::new();
        listings
            .expect_fetch_listings()
            .returning(|kind, city| match (kind, city) {
                (ListingKind::Hotel, "Pune") => Ok(vec![hotel("p1", 18.52, 73.85)]),
                _ => Err(SourceError::Transport("down".into())),
            });

        let mut page = controller(listings, MockReviewSource::new());

        page.dispatch(Command::Search {
            city: "Delhi".into(),
        })
        .await
        .unwrap();
        assert_eq!(page.map().marker_count(), 8);

        let outcome = page
            .dispatch(Command::Search {
                city: "Pune".into(),
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Searched {
                city: "Pune".into(),
                total: 1
            }
        );
        assert_eq!(page.map().marker_count(), 1);
        assert_eq!(page.context().unwrap().city, "Pune");
    }

    #[tokio::test]
    async fn test_blank_search_clears_state() {
        let mut listings = MockListingSource::new();
        listings
            .expect_fetch_listings()
            .returning(|_, _| Err(SourceError::Empty));

        let mut page = controller(listings, MockReviewSource::new());
        page.dispatch(Command::Search {
            city: "Mumbai".into(),
        })
        .await
        .unwrap();
        assert!(page.context().is_some());

        let result = page.dispatch(Command::Search { city: "  ".into() }).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert!(page.context().is_none());
        assert_eq!(page.map().marker_count(), 0);
    }

    #[tokio::test]
    async fn test_open_details_focuses_map() {
        let mut listings = MockListingSource::new();
        listings
            .expect_fetch_details()
            .returning(|_, id| Ok(hotel(id, 19.0, 72.8)));

        let mut page = controller(listings, MockReviewSource::new());
        let outcome = page
            .dispatch(Command::OpenDetails {
                kind: ListingKind::Hotel,
                id: "m9".into(),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::DetailsOpened {
                origin: DataOrigin::Remote
            }
        );
        assert_eq!(page.map().marker_count(), 1);
        match page.map().viewport() {
            Viewport::Center { zoom, .. } => assert_eq!(zoom, DETAIL_ZOOM),
            other => panic!("unexpected viewport {other:?}"),
        }
        assert_eq!(page.detail().unwrap().record.id, "m9");
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_reviews() {
        let mut reviews = MockReviewSource::new();
        reviews.expect_fetch_reviews().times(1).returning(|_| {
            Ok(vec![Review {
                author_name: "Asha".into(),
                rating: 4,
                text: "Nice".into(),
                timestamp: None,
            }])
        });
        reviews
            .expect_post_review()
            .times(1)
            .returning(|_, _, _| Err(SourceError::Status { status: 503 }));

        let mut page = controller(MockListingSource::new(), reviews);
        let target = ReviewTarget::location("Delhi");

        page.dispatch(Command::LoadReviews {
            target: target.clone(),
        })
        .await
        .unwrap();

        let result = page
            .dispatch(Command::SubmitReview {
                target,
                draft: ReviewDraft::new(Some(2), "Too hot"),
            })
            .await;

        assert!(matches!(result, Err(AppError::Upstream { .. })));
        assert_eq!(page.reviews().len(), 1);
        assert_eq!(page.reviews()[0].author_name, "Asha");
    }

    #[tokio::test]
    async fn test_submit_reloads_but_publish_does_not() {
        let mut reviews = MockReviewSource::new();
        reviews
            .expect_post_review()
            .times(2)
            .returning(|_, _, _| Ok(()));
        reviews.expect_fetch_reviews().times(1).returning(|_| {
            Ok(vec![Review {
                author_name: "Ravi".into(),
                rating: 5,
                text: "Sunset views".into(),
                timestamp: None,
            }])
        });

        let mut page = controller(MockListingSource::new(), reviews);
        let target = ReviewTarget::location("Goa");

        let outcome = page
            .dispatch(Command::PublishReview {
                target: target.clone(),
                draft: ReviewDraft::new(Some(5), "Sunset views"),
            })
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::ReviewPublished);
        assert!(page.reviews().is_empty());

        let outcome = page
            .dispatch(Command::SubmitReview {
                target,
                draft: ReviewDraft::new(Some(5), "Sunset views"),
            })
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::ReviewsLoaded { count: 1 });
    }
}
