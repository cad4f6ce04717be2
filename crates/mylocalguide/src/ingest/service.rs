use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use super::classifier::CategoryClassifier;
use super::dedup::DedupContext;
use super::domain::{IngestionReport, RejectedCandidate, VenueCandidate, VenueId, VenueRecord};
use super::parser::{VenueCsvImporter, VenueImportError};
use super::repository::{
    NeighborhoodRepository, NewNeighborhood, RepositoryError, UpsertOutcome, VenueRepository,
};
use crate::neighborhoods::{slugify, NeighborhoodResolver};

/// Service composing the resolver, classifier, and repositories into an
/// ingestion run.
pub struct IngestionService<N, V> {
    resolver: Arc<NeighborhoodResolver>,
    classifier: Arc<CategoryClassifier>,
    neighborhoods: Arc<N>,
    venues: Arc<V>,
    runs: AtomicU64,
}

impl<N, V> IngestionService<N, V>
where
    N: NeighborhoodRepository + 'static,
    V: VenueRepository + 'static,
{
    pub fn new(
        resolver: Arc<NeighborhoodResolver>,
        classifier: Arc<CategoryClassifier>,
        neighborhoods: Arc<N>,
        venues: Arc<V>,
    ) -> Self {
        Self {
            resolver,
            classifier,
            neighborhoods,
            venues,
            runs: AtomicU64::new(0),
        }
    }

    pub fn resolver(&self) -> &NeighborhoodResolver {
        &self.resolver
    }

    /// Ingest a batch of candidates, deduplicating within the run.
    ///
    /// `now` stamps the run start and venue timestamps; the finish time adds
    /// the measured wall-clock duration.
    pub fn run(
        &self,
        candidates: Vec<VenueCandidate>,
        now: DateTime<Utc>,
    ) -> Result<IngestionReport, IngestionError> {
        let clock = Instant::now();
        let sequence = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let mut report = IngestionReport::new(now, sequence, candidates.len());
        let mut seen = DedupContext::new();

        for candidate in candidates {
            if let Some(reason) = rejection_reason(&candidate) {
                warn!(external_id = %candidate.external_id, reason, "rejecting venue");
                report.rejected.push(RejectedCandidate {
                    external_id: candidate.external_id,
                    reason: reason.to_string(),
                });
                continue;
            }

            if !seen.first_sighting(&candidate) {
                debug!(key = %candidate.key(), "duplicate within run");
                report.duplicates += 1;
                continue;
            }

            let record = self.build_record(candidate, now)?;
            *report.by_method.entry(record.method).or_default() += 1;

            match self.venues.upsert(record)?.1 {
                UpsertOutcome::Inserted => report.inserted += 1,
                UpsertOutcome::Updated => report.updated += 1,
            }
        }

        report.finished_at =
            now + Duration::from_std(clock.elapsed()).unwrap_or_else(|_| Duration::zero());
        info!(
            run_id = %report.run_id,
            elapsed_ms = report.elapsed().num_milliseconds(),
            received = report.received,
            inserted = report.inserted,
            updated = report.updated,
            duplicates = report.duplicates,
            rejected = report.rejected.len(),
            "ingestion run finished"
        );
        Ok(report)
    }

    /// Parse a CSV export and ingest its rows.
    pub fn import_csv<R: Read>(
        &self,
        reader: R,
        now: DateTime<Utc>,
    ) -> Result<IngestionReport, IngestionError> {
        let candidates = VenueCsvImporter::from_reader(reader)?;
        self.run(candidates, now)
    }

    pub fn venues(&self) -> Result<Vec<VenueRecord>, IngestionError> {
        Ok(self.venues.list()?)
    }

    fn build_record(
        &self,
        candidate: VenueCandidate,
        now: DateTime<Utc>,
    ) -> Result<VenueRecord, IngestionError> {
        let category = self.classifier.categorize(&candidate).to_string();
        let resolution = self.resolver.resolve(&candidate.name, &candidate.address);

        let description = self
            .resolver
            .tables()
            .profile(&resolution.neighborhood)
            .map(|profile| profile.description.clone())
            .unwrap_or_default();
        let neighborhood = self.neighborhoods.find_or_create(NewNeighborhood {
            name: resolution.neighborhood.clone(),
            slug: slugify(&resolution.neighborhood),
            description,
            city_id: self.resolver.config().city_id,
        })?;

        Ok(VenueRecord {
            id: VenueId(String::new()),
            source: candidate.source,
            external_id: candidate.external_id.trim().to_string(),
            name: candidate.name.trim().to_string(),
            address: candidate.address.trim().to_string(),
            category,
            neighborhood_id: neighborhood.id,
            neighborhood: neighborhood.name,
            confidence: resolution.confidence,
            method: resolution.method,
            rating: candidate.rating,
            review_count: candidate.review_count,
            phone: candidate.phone,
            website: candidate.website,
            first_seen: now,
            last_seen: now,
        })
    }
}

fn rejection_reason(candidate: &VenueCandidate) -> Option<&'static str> {
    if candidate.external_id.trim().is_empty() {
        return Some("missing external id");
    }
    if candidate.name.trim().is_empty() {
        return Some("missing name");
    }
    match candidate.rating {
        Some(rating) if !(0.0..=5.0).contains(&rating) => Some("rating outside 0-5"),
        _ => None,
    }
}

/// Error raised by the ingestion service.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error(transparent)]
    Import(#[from] VenueImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
