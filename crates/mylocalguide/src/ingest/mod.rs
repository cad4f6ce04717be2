//! Venue ingestion: classify, deduplicate, resolve, and upsert listings
//! pulled from third-party sources.

pub mod classifier;
mod dedup;
pub mod domain;
pub mod memory;
mod parser;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classifier::{CategoryClassifier, FALLBACK_CATEGORY};
pub use dedup::DedupContext;
pub use domain::{
    ExternalKey, IngestionReport, ListingSource, RejectedCandidate, VenueCandidate, VenueId,
    VenueRecord,
};
pub use memory::{InMemoryNeighborhoodRepository, InMemoryVenueRepository};
pub use parser::{VenueCsvImporter, VenueImportError};
pub use repository::{
    NeighborhoodRepository, NewNeighborhood, RepositoryError, UpsertOutcome, VenueRepository,
};
pub use router::venue_router;
pub use service::{IngestionError, IngestionService};
