use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::ingest::classifier::CategoryClassifier;
use crate::ingest::domain::{ExternalKey, ListingSource, VenueCandidate, VenueRecord};
use crate::ingest::memory::{InMemoryNeighborhoodRepository, InMemoryVenueRepository};
use crate::ingest::repository::{RepositoryError, UpsertOutcome, VenueRepository};
use crate::ingest::service::IngestionService;
use crate::neighborhoods::{NeighborhoodResolver, ResolverConfig};

pub(super) type MemoryService =
    IngestionService<InMemoryNeighborhoodRepository, InMemoryVenueRepository>;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn resolver() -> Arc<NeighborhoodResolver> {
    Arc::new(NeighborhoodResolver::san_francisco(ResolverConfig::default()).expect("resolver"))
}

pub(super) fn classifier() -> Arc<CategoryClassifier> {
    Arc::new(CategoryClassifier::standard().expect("standard rules compile"))
}

pub(super) fn build_service() -> (
    Arc<MemoryService>,
    Arc<InMemoryNeighborhoodRepository>,
    Arc<InMemoryVenueRepository>,
) {
    let neighborhoods = Arc::new(InMemoryNeighborhoodRepository::default());
    let venues = Arc::new(InMemoryVenueRepository::default());
    let service = Arc::new(IngestionService::new(
        resolver(),
        classifier(),
        neighborhoods.clone(),
        venues.clone(),
    ));
    (service, neighborhoods, venues)
}

pub(super) fn candidate(
    source: ListingSource,
    external_id: &str,
    name: &str,
    address: &str,
    tags: &[&str],
) -> VenueCandidate {
    VenueCandidate {
        source,
        external_id: external_id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        rating: Some(4.5),
        review_count: Some(120),
        phone: None,
        website: None,
    }
}

pub(super) fn mission_taqueria() -> VenueCandidate {
    candidate(
        ListingSource::Yelp,
        "la-taqueria-sf",
        "La Taqueria",
        "2889 Mission St, San Francisco, CA 94110",
        &["Mexican", "Tacos"],
    )
}

pub(super) fn wharf_chowder() -> VenueCandidate {
    candidate(
        ListingSource::Google,
        "ChIJ-wharf-chowder",
        "Pier Chowder House",
        "Pier 39, San Francisco, CA 94133",
        &["Seafood"],
    )
}

pub(super) struct UnavailableVenues;

impl VenueRepository for UnavailableVenues {
    fn upsert(&self, _record: VenueRecord) -> Result<(VenueRecord, UpsertOutcome), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _key: &ExternalKey) -> Result<Option<VenueRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<VenueRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
