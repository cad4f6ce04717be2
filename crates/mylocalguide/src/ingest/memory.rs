//! Mutex-backed repositories for the CLI, demos, and tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{ExternalKey, VenueId, VenueRecord};
use super::repository::{
    NeighborhoodRepository, NewNeighborhood, RepositoryError, UpsertOutcome, VenueRepository,
};
use crate::neighborhoods::{Neighborhood, NeighborhoodId};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
}

#[derive(Default, Clone)]
pub struct InMemoryNeighborhoodRepository {
    by_slug: Arc<Mutex<BTreeMap<String, Neighborhood>>>,
}

impl NeighborhoodRepository for InMemoryNeighborhoodRepository {
    fn find_or_create(&self, draft: NewNeighborhood) -> Result<Neighborhood, RepositoryError> {
        let mut guard = lock(&self.by_slug)?;
        if let Some(existing) = guard.get(&draft.slug) {
            return Ok(existing.clone());
        }

        let neighborhood = Neighborhood {
            id: NeighborhoodId(guard.len() as u64 + 1),
            name: draft.name,
            slug: draft.slug.clone(),
            description: draft.description,
            city_id: draft.city_id,
        };
        guard.insert(draft.slug, neighborhood.clone());
        Ok(neighborhood)
    }

    fn list(&self) -> Result<Vec<Neighborhood>, RepositoryError> {
        let guard = lock(&self.by_slug)?;
        let mut neighborhoods: Vec<Neighborhood> = guard.values().cloned().collect();
        neighborhoods.sort_by_key(|neighborhood| neighborhood.id);
        Ok(neighborhoods)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryVenueRepository {
    records: Arc<Mutex<BTreeMap<ExternalKey, VenueRecord>>>,
}

impl VenueRepository for InMemoryVenueRepository {
    fn upsert(
        &self,
        mut record: VenueRecord,
    ) -> Result<(VenueRecord, UpsertOutcome), RepositoryError> {
        let mut guard = lock(&self.records)?;
        let key = record.key();

        let outcome = match guard.get(&key) {
            Some(existing) => {
                record.id = existing.id.clone();
                record.first_seen = existing.first_seen;
                UpsertOutcome::Updated
            }
            None => {
                record.id = VenueId(format!("venue-{:06}", guard.len() + 1));
                UpsertOutcome::Inserted
            }
        };

        guard.insert(key, record.clone());
        Ok((record, outcome))
    }

    fn fetch(&self, key: &ExternalKey) -> Result<Option<VenueRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.get(key).cloned())
    }

    fn list(&self) -> Result<Vec<VenueRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        let mut records: Vec<VenueRecord> = guard.values().cloned().collect();
        records.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(records)
    }
}
