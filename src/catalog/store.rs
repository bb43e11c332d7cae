//! In-memory catalog store.

use parking_lot::RwLock;
use thiserror::Error;

use crate::catalog::types::{seed_records, LaserDisc, NewLaserDisc};

/// Errors produced by catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("no record with id {0}")]
    NotFound(u64),

    /// The id counter cannot advance any further.
    #[error("id space exhausted after {0}")]
    IdSpaceExhausted(u64),

    /// The backing store could not serve the request.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the HTTP layer needs from a catalog backend.
pub trait CatalogStore: Send + Sync {
    /// All records in insertion order.
    fn list_all(&self) -> Vec<LaserDisc>;

    /// The first record whose id matches.
    fn find_by_id(&self, id: u64) -> StoreResult<LaserDisc>;

    /// Assign a fresh id to `disc`, append it and return the stored record.
    fn insert(&self, disc: NewLaserDisc) -> StoreResult<LaserDisc>;

    /// Remove the record with `id`, returning it.
    fn delete_by_id(&self, id: u64) -> StoreResult<LaserDisc>;

    /// Number of records currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Inner {
    records: Vec<LaserDisc>,
    /// Next id to hand out. Always greater than every id ever stored.
    next_id: u64,
}

/// Process-local catalog backed by an ordered `Vec`.
///
/// Ids come from a monotonic counter and are never reused, even after the
/// record holding them is deleted.
pub struct InMemoryCatalog {
    inner: RwLock<Inner>,
}

impl InMemoryCatalog {
    /// Create a store holding `records`, in the given order.
    pub fn new(records: Vec<LaserDisc>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            inner: RwLock::new(Inner { records, next_id }),
        }
    }

    /// Create a store holding the two startup records.
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_all(&self) -> Vec<LaserDisc> {
        self.inner.read().records.clone()
    }

    fn find_by_id(&self, id: u64) -> StoreResult<LaserDisc> {
        self.inner
            .read()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, disc: NewLaserDisc) -> StoreResult<LaserDisc> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        // u64::MAX is never handed out so the counter stays strictly ahead.
        inner.next_id = id
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted(id))?;

        let record = disc.with_id(id);
        inner.records.push(record.clone());
        Ok(record)
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<LaserDisc> {
        let mut inner = self.inner.write();
        let pos = inner
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(inner.records.remove(pos))
    }

    fn len(&self) -> usize {
        self.inner.read().records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{RotationType, VideoFormat};
    use std::collections::HashSet;

    fn jurassic_park() -> NewLaserDisc {
        NewLaserDisc {
            film_name: "Jurassic Park".to_string(),
            rotation_type: RotationType::Cav,
            region: "US".to_string(),
            length_minutes: 127,
            video_format: VideoFormat::Ntsc,
        }
    }

    #[test]
    fn test_seeded_store_lists_in_order() {
        let store = InMemoryCatalog::seeded();
        let all = store.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].film_name, "Blade Runner");
        assert_eq!(all[1].film_name, "Terminator 2");
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = InMemoryCatalog::default();
        assert!(store.list_all().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_assigns_id_after_seed() {
        let store = InMemoryCatalog::seeded();
        let created = store.insert(jurassic_park()).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(store.find_by_id(3).unwrap(), created);
        assert_eq!(store.list_all().last(), Some(&created));
    }

    #[test]
    fn test_rapid_inserts_get_unique_ids() {
        let store = InMemoryCatalog::seeded();
        let mut ids: HashSet<u64> = store.list_all().iter().map(|r| r.id).collect();
        for _ in 0..500 {
            let created = store.insert(jurassic_park()).unwrap();
            assert!(ids.insert(created.id), "duplicate id {}", created.id);
        }
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = InMemoryCatalog::seeded();
        let first = store.insert(jurassic_park()).unwrap();
        store.delete_by_id(first.id).unwrap();
        let second = store.insert(jurassic_park()).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let store = InMemoryCatalog::seeded();
        assert_eq!(store.find_by_id(42), Err(StoreError::NotFound(42)));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = InMemoryCatalog::seeded();
        let removed = store.delete_by_id(1).unwrap();
        assert_eq!(removed.film_name, "Blade Runner");
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(1), Err(StoreError::NotFound(1)));
    }

    #[test]
    fn test_delete_missing_leaves_store_unchanged() {
        let store = InMemoryCatalog::seeded();
        let before = store.list_all();
        assert_eq!(store.delete_by_id(9), Err(StoreError::NotFound(9)));
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn test_exhausted_counter_reports_error() {
        let store = InMemoryCatalog::new(vec![jurassic_park().with_id(u64::MAX - 1)]);
        assert_eq!(
            store.insert(jurassic_park()),
            Err(StoreError::IdSpaceExhausted(u64::MAX))
        );
        assert_eq!(store.len(), 1);
    }
}
