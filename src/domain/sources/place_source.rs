//! Source trait for points of interest.

use crate::domain::entities::Place;
use crate::domain::sources::SourceResult;
use async_trait::async_trait;

/// A service that can list tourist places in a city.
///
/// Several sources are tried in order by
/// [`crate::application::services::PlaceService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    /// Places with usable coordinates; elements without them are skipped.
    async fn search_places(&self, city: &str) -> SourceResult<Vec<Place>>;
}
