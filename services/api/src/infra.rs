use metrics_exporter_prometheus::PrometheusHandle;
use nutriplan::config::AppConfig;
use nutriplan::error::AppError;
use nutriplan::recommendation::{CatalogState, FoodCatalog, RecommendationService};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service for one-shot commands. Unlike the server, a catalog that fails to
/// load is an error here rather than a degraded state.
pub(crate) fn offline_service(
    config: &AppConfig,
    catalog_override: Option<PathBuf>,
) -> Result<RecommendationService, AppError> {
    let path = catalog_override.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = FoodCatalog::from_path(path)?;
    Ok(RecommendationService::new(
        CatalogState::from(catalog),
        config.planner,
    ))
}
