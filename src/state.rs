//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::Result;

use crate::application::controller::PageController;
use crate::application::services::{PlaceService, ResolverService, ReviewService};
use crate::config::Config;
use crate::domain::sources::PlaceSource;
use crate::infrastructure::{
    BackendClient, OverpassClient, PlacesProxy, StaticCatalog, TouristProxyPlaces,
};
use crate::render::RenderOptions;

/// Read-only services shared across requests.
///
/// Every request builds its own [`PageController`] from these, so no
/// request ever sees another request's search state.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub resolver: Arc<ResolverService<BackendClient>>,
    pub reviews: Arc<ReviewService<BackendClient>>,
    pub places: Arc<PlaceService>,
    pub render: Arc<RenderOptions>,
}

impl AppState {
    pub fn new(
        backend: BackendClient,
        places: PlaceService,
        catalog: StaticCatalog,
        render: RenderOptions,
    ) -> Self {
        let source = Arc::new(backend.clone());
        Self {
            resolver: Arc::new(ResolverService::new(source.clone(), Arc::new(catalog))),
            reviews: Arc::new(ReviewService::new(source)),
            places: Arc::new(places),
            render: Arc::new(render),
            backend,
        }
    }

    /// Builds clients and services from configuration.
    ///
    /// Place sources are tried in this order: the backend's tourist proxy,
    /// the backend's places proxy, then Overpass when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured URL is unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = BackendClient::new(&config.backend_url, config.request_timeout())?;

        let mut sources: Vec<Arc<dyn PlaceSource>> = vec![
            Arc::new(TouristProxyPlaces::new(backend.clone())),
            Arc::new(PlacesProxy::new(backend.clone())),
        ];
        if let Some(ref url) = config.overpass_url {
            sources.push(Arc::new(OverpassClient::new(url, config.request_timeout())?));
        }

        Ok(Self::new(
            backend,
            PlaceService::new(sources),
            StaticCatalog::builtin(),
            RenderOptions::new(config.currency_symbol.clone()),
        ))
    }

    /// A fresh controller for one request.
    pub fn page(&self) -> PageController<BackendClient, BackendClient> {
        PageController::new(
            self.resolver.clone(),
            self.reviews.clone(),
            self.places.clone(),
        )
    }
}
