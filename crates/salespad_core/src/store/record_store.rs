//! Generic ordered collection with copy-out reads.
//!
//! # Responsibility
//! - Provide the collection primitive shared by all three CRUD services.
//! - Allocate creation-time identifiers.
//!
//! # Invariants
//! - Insertion order is preserved; `remove` closes the gap without
//!   reordering survivors.
//! - Allocated ids are strictly increasing within one store, so two creates
//!   inside the same wall-clock millisecond still get distinct ids.

use crate::clock;
use crate::model::{Record, RecordId};
use crate::store::{StoreError, StoreResult};

/// In-memory ordered collection of records of one kind.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    last_id: RecordId,
}

impl<T: Record> RecordStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a store pre-populated with `records`, keeping their order.
    ///
    /// The id allocator is primed past the highest existing id so later
    /// creates cannot collide with seeded records.
    pub fn with_records(records: Vec<T>) -> Self {
        let last_id = records.iter().map(Record::id).max().unwrap_or(0);
        Self { records, last_id }
    }

    /// Allocates the next record id.
    ///
    /// Ids are epoch milliseconds, bumped forward when the wall clock has
    /// not advanced since the previous allocation.
    pub fn allocate_id(&mut self) -> RecordId {
        self.last_id = clock::now_ms().max(self.last_id + 1);
        self.last_id
    }

    /// Returns copies of all records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Returns a copy of the record with `id`, if present.
    pub fn find(&self, id: RecordId) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Appends `record` and returns a copy of the stored value.
    pub fn insert(&mut self, record: T) -> T {
        self.last_id = self.last_id.max(record.id());
        let stored = record.clone();
        self.records.push(record);
        stored
    }

    /// Applies `apply` to the record with `id` and returns a copy of the
    /// mutated value.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record matches `id`; the collection
    ///   is left untouched.
    pub fn update(&mut self, id: RecordId, apply: impl FnOnce(&mut T)) -> StoreResult<T> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        apply(record);
        Ok(record.clone())
    }

    /// Removes the record with `id` and returns it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record matches `id`; the collection
    ///   is left untouched.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<T> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
