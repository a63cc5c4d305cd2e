//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend reachable
/// - **503 Service Unavailable**: Backend unreachable; pages still render
///   from the fallback catalog
///
/// # Components Checked
///
/// 1. **Backend**: Any HTTP answer from the base URL counts as reachable
/// 2. **Catalog**: Number of cities with fallback data
/// 3. **Place sources**: Configured sources in the order they are tried
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend = check_backend(&state).await;

    let cities: Vec<&str> = state.resolver.catalog().city_keys().collect();
    let catalog = CheckStatus::ok(format!("{} cities: {}", cities.len(), cities.join(", ")));

    let names = state.places.source_names();
    let place_sources = if names.is_empty() {
        CheckStatus::error("No place sources configured")
    } else {
        CheckStatus::ok(names.join(" -> "))
    };

    let all_healthy = backend.is_ok() && place_sources.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend,
            catalog,
            place_sources,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_backend(state: &AppState) -> CheckStatus {
    match state.backend.ping().await {
        Ok(status) => CheckStatus::ok(format!(
            "Reachable at {} (HTTP {status})",
            state.backend.base_url()
        )),
        Err(e) => CheckStatus::error(format!("Backend unreachable: {e}")),
    }
}
