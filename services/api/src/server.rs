use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nutriplan::config::AppConfig;
use nutriplan::error::AppError;
use nutriplan::recommendation::{CatalogState, RecommendationService};
use nutriplan::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.catalog.path = catalog;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = CatalogState::load(&config.catalog.path);
    match &catalog {
        CatalogState::Loaded(foods) => {
            info!(path = %config.catalog.path.display(), foods = foods.len(), "food catalog ready");
        }
        CatalogState::Unavailable(reason) => warn!(
            path = %config.catalog.path.display(),
            %reason,
            "food catalog unavailable; plan and food requests will be refused"
        ),
    }

    let service = Arc::new(RecommendationService::new(catalog, config.planner));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_operational_routes(service.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(service.is_ready(), Ordering::Release);

    info!(?config.environment, %addr, ready = service.is_ready(), "nutriplan api listening");

    axum::serve(listener, app).await?;
    Ok(())
}
