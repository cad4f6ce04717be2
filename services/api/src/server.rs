use crate::cli::ServeArgs;
use crate::infra::{build_ingestion_service, build_resolver, AppState};
use crate::routes::with_app_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mylocalguide::config::AppConfig;
use mylocalguide::error::AppError;
use mylocalguide::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let resolver = build_resolver(config.resolver.clone())?;
    let ingestion = build_ingestion_service(resolver.clone())?;
    info!(
        neighborhoods = resolver.tables().neighborhoods.len(),
        default = resolver.default_neighborhood(),
        "reference tables loaded"
    );

    let app = with_app_routes(resolver, ingestion)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "neighborhood resolver ready");

    axum::serve(listener, app).await?;
    Ok(())
}
