use serde::{Deserialize, Serialize};

use super::domain::{ExternalKey, VenueRecord};
use crate::neighborhoods::Neighborhood;

/// Neighborhood row to create when a resolved name is not stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNeighborhood {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub city_id: u32,
}

/// Whether an upsert created a row or refreshed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Storage for neighborhoods referenced by venues.
pub trait NeighborhoodRepository: Send + Sync {
    /// Looks up by slug and inserts when missing.
    fn find_or_create(&self, draft: NewNeighborhood) -> Result<Neighborhood, RepositoryError>;
    fn list(&self) -> Result<Vec<Neighborhood>, RepositoryError>;
}

/// Storage for venues, keyed on source plus external id.
pub trait VenueRepository: Send + Sync {
    /// Inserts or updates by conflict key. Updates keep the stored `id` and
    /// `first_seen`.
    fn upsert(&self, record: VenueRecord) -> Result<(VenueRecord, UpsertOutcome), RepositoryError>;
    fn fetch(&self, key: &ExternalKey) -> Result<Option<VenueRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<VenueRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
