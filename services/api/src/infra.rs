use metrics_exporter_prometheus::PrometheusHandle;
use mylocalguide::error::AppError;
use mylocalguide::ingest::{
    CategoryClassifier, InMemoryNeighborhoodRepository, InMemoryVenueRepository, IngestionService,
};
use mylocalguide::neighborhoods::{NeighborhoodResolver, ResolverConfig};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type MemoryIngestionService =
    IngestionService<InMemoryNeighborhoodRepository, InMemoryVenueRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_resolver(config: ResolverConfig) -> Result<Arc<NeighborhoodResolver>, AppError> {
    Ok(Arc::new(NeighborhoodResolver::san_francisco(config)?))
}

pub(crate) fn build_ingestion_service(
    resolver: Arc<NeighborhoodResolver>,
) -> Result<Arc<MemoryIngestionService>, AppError> {
    let classifier = CategoryClassifier::standard()?;
    Ok(Arc::new(IngestionService::new(
        resolver,
        Arc::new(classifier),
        Arc::new(InMemoryNeighborhoodRepository::default()),
        Arc::new(InMemoryVenueRepository::default()),
    )))
}
