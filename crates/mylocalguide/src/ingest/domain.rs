use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::neighborhoods::{Confidence, NeighborhoodId, ResolutionMethod};

/// Third-party listing source a venue was ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Yelp,
    Google,
    Manual,
}

impl ListingSource {
    pub fn label(&self) -> &'static str {
        match self {
            ListingSource::Yelp => "yelp",
            ListingSource::Google => "google",
            ListingSource::Manual => "manual",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yelp" => Some(Self::Yelp),
            "google" | "google_places" | "google-places" => Some(Self::Google),
            "manual" | "" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conflict key for upserts: one row per source-qualified external id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExternalKey {
    pub source: ListingSource,
    pub external_id: String,
}

impl fmt::Display for ExternalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.external_id)
    }
}

/// A single listing as received from an ingestion source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueCandidate {
    pub source: ListingSource,
    pub external_id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl VenueCandidate {
    pub fn key(&self) -> ExternalKey {
        ExternalKey {
            source: self.source,
            external_id: self.external_id.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(pub String);

/// Persisted venue row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub id: VenueId,
    pub source: ListingSource,
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub category: String,
    pub neighborhood_id: NeighborhoodId,
    pub neighborhood: String,
    pub confidence: Confidence,
    pub method: ResolutionMethod,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl VenueRecord {
    pub fn key(&self) -> ExternalKey {
        ExternalKey {
            source: self.source,
            external_id: self.external_id.clone(),
        }
    }
}

/// Candidate dropped before persistence, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedCandidate {
    pub external_id: String,
    pub reason: String,
}

/// Tally of a single ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub received: usize,
    pub inserted: usize,
    pub updated: usize,
    pub duplicates: usize,
    pub rejected: Vec<RejectedCandidate>,
    pub by_method: BTreeMap<ResolutionMethod, usize>,
}

impl IngestionReport {
    /// `sequence` disambiguates runs started within the same millisecond.
    pub(crate) fn new(started_at: DateTime<Utc>, sequence: u64, received: usize) -> Self {
        Self {
            run_id: format!("run-{}-{sequence:04}", started_at.format("%Y%m%dT%H%M%S%.3fZ")),
            started_at,
            finished_at: started_at,
            received,
            inserted: 0,
            updated: 0,
            duplicates: 0,
            rejected: Vec::new(),
            by_method: BTreeMap::new(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }

    pub fn stored(&self) -> usize {
        self.inserted + self.updated
    }
}
