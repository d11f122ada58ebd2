//! Umbrella crate for the stringprops analysis service.
//!
//! This crate stitches together the analysis, storage, and query layers so
//! callers can drive the whole data flow with a single API entry point:
//!
//! ```text
//! raw string -> analyzer -> StringRecord -> StringStore (dedup-checked)
//! retrieval: StringStore::list snapshot -> filter engine -> matches
//! free text: interpreter -> FilterSpec -> filter engine -> matches
//! ```
//!
//! The HTTP boundary in `stringprops-server` builds on these same helpers;
//! everything here is usable directly as a library.

pub use analyzer::{analyze, is_palindrome, normalize_for_palindrome, sha256_hex, StringProperties};
pub use query::{
    apply, interpret, matches, parse_contains_character, FilterSpec, QueryError,
};
pub use store::{InMemoryBackend, RecordBackend, StoreError, StringRecord, StringStore};

use thiserror::Error;

/// Errors that can occur while driving a record through the service
/// pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    #[error("query failure: {0}")]
    Query(#[from] QueryError),
}

/// The result of a free-text query: the filter the interpreter derived and
/// the records that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub spec: FilterSpec,
    pub records: Vec<StringRecord>,
}

/// Analyze a value and store the resulting record.
///
/// The second ingest of an identical value fails with
/// [`StoreError::AlreadyExists`] wrapped in [`ServiceError::Store`]; the
/// store's content addressing makes this atomic under concurrency.
pub fn ingest_value(store: &StringStore, value: &str) -> Result<StringRecord, ServiceError> {
    Ok(store.create(StringRecord::analyze(value))?)
}

/// Validate a structured filter and evaluate it against a snapshot of the
/// store.
///
/// An empty filter returns every stored record in insertion order.
pub fn filter_records(
    store: &StringStore,
    spec: &FilterSpec,
) -> Result<Vec<StringRecord>, ServiceError> {
    spec.validate().map_err(ServiceError::Query)?;
    Ok(apply(store.list()?, spec))
}

/// Interpret a free-text phrase and evaluate the derived filter against a
/// snapshot of the store.
///
/// A phrase that matches none of the interpreter's patterns yields
/// [`QueryError::Uninterpretable`]; the interpreter itself never fails,
/// the empty filter is simply not accepted on this path.
pub fn query_records(store: &StringStore, text: &str) -> Result<QueryOutcome, ServiceError> {
    let spec = interpret(text);
    if spec.is_empty() {
        return Err(ServiceError::Query(QueryError::Uninterpretable));
    }
    let records = apply(store.list()?, &spec);
    Ok(QueryOutcome { spec, records })
}
