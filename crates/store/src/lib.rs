//! Stringprops storage layer.
//!
//! [`StringStore`] is the single owner of mutable shared state in the
//! system: a content-addressed collection of [`StringRecord`]s keyed by
//! the analyzer's SHA-256 hash. Identical input values map to identical
//! ids, so `create` deduplicates by construction — the second create of a
//! value fails with [`StoreError::AlreadyExists`] no matter how the two
//! calls interleave.
//!
//! ## Concurrency contract
//!
//! - `create`/`delete` run their check-and-act sequence under a single
//!   write-lock acquisition in the backend: concurrent creates of the same
//!   value yield exactly one success, everyone else observes
//!   `AlreadyExists`.
//! - `get`/`list` take the read lock and may run concurrently with each
//!   other; no caller ever observes a partially inserted record.
//!
//! No operation performs I/O or suspends; everything is bounded by input
//! size and completes synchronously.

mod backend;
mod error;
mod record;

pub use crate::backend::{InMemoryBackend, RecordBackend};
pub use crate::error::StoreError;
pub use crate::record::StringRecord;

use tracing::debug;

/// Content-addressed store for string analysis records.
///
/// Cheap to share: hold it in an `Arc` and call from any thread. State
/// lives in the injected backend, never in process-wide globals, so each
/// service (or test) gets its own isolated store with the service's
/// lifecycle.
pub struct StringStore {
    backend: Box<dyn RecordBackend>,
}

impl StringStore {
    /// Create a store over the in-memory backend.
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(InMemoryBackend::new()))
    }

    /// Create a store over an explicit backend. Useful for tests that
    /// want to observe or fault-inject storage operations.
    pub fn with_backend(backend: Box<dyn RecordBackend>) -> Self {
        Self { backend }
    }

    /// Insert a new record, returning it back on success.
    ///
    /// Fails with [`StoreError::AlreadyExists`] when a record with the
    /// same id (same content) is present. Exactly one of any number of
    /// concurrent creates for the same value succeeds.
    pub fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError> {
        self.backend.insert(record.clone())?;
        debug!(id = %record.id, length = record.properties.length, "stored new record");
        Ok(record)
    }

    /// Retrieve a record by its content hash.
    pub fn get(&self, id: &str) -> Result<StringRecord, StoreError> {
        self.backend.get(id)
    }

    /// Delete a record by its content hash. A second delete of the same id
    /// fails with [`StoreError::NotFound`].
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.backend.remove(id)?;
        debug!(id = %id, "deleted record");
        Ok(())
    }

    /// A point-in-time snapshot of all records, in insertion order.
    ///
    /// The order is stable but carries no semantics — filtering treats the
    /// snapshot as a set.
    pub fn list(&self) -> Result<Vec<StringRecord>, StoreError> {
        self.backend.snapshot()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.backend.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for StringStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn create_then_get_round_trips() {
        let store = StringStore::in_memory();
        let created = store
            .create(StringRecord::analyze("hello world"))
            .expect("first create succeeds");

        let fetched = store.get(&created.id).expect("record is retrievable");
        assert_eq!(fetched, created);
    }

    #[test]
    fn duplicate_create_is_rejected_and_size_stays_at_one() {
        let store = StringStore::in_memory();
        let first = store
            .create(StringRecord::analyze("duplicate me"))
            .expect("first create succeeds");

        let err = store
            .create(StringRecord::analyze("duplicate me"))
            .expect_err("second create of same value fails");
        assert_eq!(err, StoreError::AlreadyExists { id: first.id });
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn delete_then_get_reports_not_found() {
        let store = StringStore::in_memory();
        let record = store
            .create(StringRecord::analyze("ephemeral"))
            .expect("create succeeds");

        store.delete(&record.id).expect("first delete succeeds");
        assert_eq!(
            store.get(&record.id),
            Err(StoreError::NotFound {
                id: record.id.clone()
            })
        );
        assert_eq!(
            store.delete(&record.id),
            Err(StoreError::NotFound { id: record.id })
        );
    }

    #[test]
    fn get_unknown_id_reports_not_found() {
        let store = StringStore::in_memory();
        let err = store.get("0000").expect_err("nothing stored");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn list_returns_insertion_order_snapshot() {
        let store = StringStore::in_memory();
        for value in ["first", "second", "third"] {
            store.create(StringRecord::analyze(value)).unwrap();
        }

        let values: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec!["first", "second", "third"]);

        // A snapshot is a copy: later mutations don't touch it.
        let snapshot = store.list().unwrap();
        store.delete(&snapshot[0].id).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn concurrent_creates_of_same_value_have_one_winner() {
        let store = Arc::new(StringStore::in_memory());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.create(StringRecord::analyze("contended value")))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::AlreadyExists { .. })))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(store.len().unwrap(), 1);
    }
}
