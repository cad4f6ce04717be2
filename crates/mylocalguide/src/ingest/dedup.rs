use std::collections::HashSet;

use super::domain::{ExternalKey, VenueCandidate};

/// External ids seen during one ingestion run.
///
/// Each run owns a fresh context, so nothing leaks between runs.
#[derive(Debug, Default)]
pub struct DedupContext {
    seen: HashSet<ExternalKey>,
}

impl DedupContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the candidate and reports whether this is its first sighting.
    pub fn first_sighting(&mut self, candidate: &VenueCandidate) -> bool {
        self.seen.insert(candidate.key())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
