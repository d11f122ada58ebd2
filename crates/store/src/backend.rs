//! Storage backends.
//!
//! The store delegates to a [`RecordBackend`] trait object so the storage
//! seam stays injectable for testing and future durable backends. Every
//! trait operation is atomic with respect to its own effect: `insert` is a
//! single check-and-insert and `remove` a single check-and-remove, so the
//! exactly-one-success guarantee under concurrent identical requests holds
//! regardless of the backend implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::record::StringRecord;

/// Trait for a record storage backend.
pub trait RecordBackend: Send + Sync {
    /// Insert a record, failing with [`StoreError::AlreadyExists`] if its
    /// id is present. Check and insert happen under one critical section.
    fn insert(&self, record: StringRecord) -> Result<(), StoreError>;
    /// Retrieve a record by id.
    fn get(&self, id: &str) -> Result<StringRecord, StoreError>;
    /// Remove a record by id, failing with [`StoreError::NotFound`] if it
    /// is absent. Check and remove happen under one critical section.
    fn remove(&self, id: &str) -> Result<(), StoreError>;
    /// A point-in-time copy of all records in insertion order. Never
    /// observes a partially inserted record.
    fn snapshot(&self) -> Result<Vec<StringRecord>, StoreError>;
    /// Number of records currently stored.
    fn len(&self) -> Result<usize, StoreError>;
}

/// An in-memory backend using an `RwLock` around the record map.
///
/// Insertion order is tracked in a side list so `snapshot` can return
/// records in the order they were created.
pub struct InMemoryBackend {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<String, StringRecord>,
    order: Vec<String>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBackend for InMemoryBackend {
    fn insert(&self, record: StringRecord) -> Result<(), StoreError> {
        // The write lock is held across the membership check and the
        // insert, which is what makes concurrent duplicate creates resolve
        // to exactly one winner.
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        if guard.records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists {
                id: record.id.clone(),
            });
        }
        guard.order.push(record.id.clone());
        guard.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<StringRecord, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        guard
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        if guard.records.remove(id).is_none() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        guard.order.retain(|stored| stored != id);
        Ok(())
    }

    fn snapshot(&self) -> Result<Vec<StringRecord>, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard
            .order
            .iter()
            .filter_map(|id| guard.records.get(id))
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.records.len())
    }
}
