//! Passenger record storage.
//!
//! [`RecordStore`] is the seam between the engine and whatever holds the
//! records. The store owns every [`PassengerRecord`] and is the only writer;
//! callers get clones. Records are never deleted.
//!
//! [`MemoryStore`] keeps records in a sharded [`DashMap`] keyed by
//! [`RecordKey`]. The entry lock of a key is the critical section for that
//! record, so [`RecordStore::update`] on one key serialises while updates on
//! other keys proceed in parallel.

use std::cmp::Ordering;

use boarding_model::{Direction, LegGroup, PassengerRecord, RecordKey};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::error::BoardingError;

/// Closure applied to a record under its exclusive lock.
pub type RecordUpdate<'a> = dyn FnMut(&mut PassengerRecord) -> Result<(), BoardingError> + 'a;

/// Storage for passenger records.
///
/// Implementations must make [`insert_if_absent`](Self::insert_if_absent)
/// and [`update`](Self::update) atomic per [`RecordKey`].
pub trait RecordStore: Send + Sync {
    /// Exact composite-key lookup.
    fn find(&self, key: &RecordKey) -> Option<PassengerRecord>;

    /// Any record for `wristband`, used to seed identity fields.
    ///
    /// When several exist, the one with the latest `travel_at` wins; ties go
    /// to the greater leg group, then to the outbound leg.
    fn find_any_for_wristband(&self, wristband: &str) -> Option<PassengerRecord>;

    /// Insert `record` unless its key is taken.
    ///
    /// Returns the stored record and whether this call inserted it.
    fn insert_if_absent(&self, record: PassengerRecord) -> (PassengerRecord, bool);

    /// Insert or overwrite the record at its key. Returns the previous value.
    fn upsert(&self, record: PassengerRecord) -> Option<PassengerRecord>;

    /// Run `apply` against a copy of the record at `key` while holding the
    /// record's lock, storing the copy only if `apply` succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardingError::NotFound`] if no record exists at `key`, or
    /// whatever `apply` returns.
    fn update(&self, key: &RecordKey, apply: &mut RecordUpdate<'_>) -> Result<PassengerRecord, BoardingError>;

    /// Every record in `leg_group`, both directions, read in one pass.
    fn scan_leg_group(&self, leg_group: &LegGroup) -> Vec<PassengerRecord>;

    /// Records in `leg_group` travelling in `direction`. Unordered.
    fn query_by_leg(&self, leg_group: &LegGroup, direction: Direction) -> Vec<PassengerRecord> {
        self.scan_leg_group(leg_group)
            .into_iter()
            .filter(|r| r.direction == direction)
            .collect()
    }

    /// Total number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordering used to pick a seed record; the maximum wins.
fn seed_order(a: &PassengerRecord, b: &PassengerRecord) -> Ordering {
    a.travel_at
        .cmp(&b.travel_at)
        .then_with(|| a.leg_group.cmp(&b.leg_group))
        .then_with(|| b.direction.cmp(&a.direction))
}

/// In-memory [`RecordStore`] backed by a [`DashMap`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecordKey, PassengerRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Clones of every record, in no particular order.
    #[must_use]
    pub fn records(&self) -> Vec<PassengerRecord> {
        self.records.iter().map(|entry| entry.value().clone()).collect()
    }
}

impl RecordStore for MemoryStore {
    fn find(&self, key: &RecordKey) -> Option<PassengerRecord> {
        self.records.get(key).map(|entry| entry.value().clone())
    }

    fn find_any_for_wristband(&self, wristband: &str) -> Option<PassengerRecord> {
        self.records
            .iter()
            .filter(|entry| entry.key().wristband == wristband)
            .map(|entry| entry.value().clone())
            .max_by(seed_order)
    }

    fn insert_if_absent(&self, record: PassengerRecord) -> (PassengerRecord, bool) {
        match self.records.entry(record.key()) {
            Entry::Occupied(existing) => (existing.get().clone(), false),
            Entry::Vacant(slot) => {
                debug!(key = %slot.key(), "inserting passenger record");
                let stored = slot.insert(record);
                (stored.value().clone(), true)
            }
        }
    }

    fn upsert(&self, record: PassengerRecord) -> Option<PassengerRecord> {
        self.records.insert(record.key(), record)
    }

    fn update(&self, key: &RecordKey, apply: &mut RecordUpdate<'_>) -> Result<PassengerRecord, BoardingError> {
        // The guard holds the shard write lock until it drops.
        let mut entry = self.records.get_mut(key).ok_or_else(|| BoardingError::NotFound {
            wristband: key.wristband.clone(),
        })?;
        let mut draft = entry.value().clone();
        apply(&mut draft)?;
        *entry.value_mut() = draft.clone();
        debug!(%key, status = ?draft.status, "updated passenger record");
        Ok(draft)
    }

    fn scan_leg_group(&self, leg_group: &LegGroup) -> Vec<PassengerRecord> {
        self.records
            .iter()
            .filter(|entry| entry.key().leg_group == *leg_group)
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
