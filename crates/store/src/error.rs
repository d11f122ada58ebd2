//! Error types produced by the store.
//!
//! All variants are expected, local outcomes of valid operations — there is
//! no transient-failure class and nothing here warrants a retry. Errors are
//! cloneable and comparable so callers can match on them precisely and
//! tests can assert exact variants.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// A record with the same content hash is already stored. Creating the
    /// same value twice is the one way to hit this.
    #[error("record already exists: {id}")]
    AlreadyExists { id: String },

    /// No record is stored under the given identifier.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// The backend itself failed (e.g. a poisoned lock). The only variant
    /// that maps to an internal rather than a client-facing condition.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }
}
