//! The stored record type.

use analyzer::{analyze, StringProperties};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored string analysis result.
///
/// Immutable once created: `id`, `value`, `properties`, and `created_at`
/// never change for the lifetime of the record. The `id` is the SHA-256
/// content hash computed at analysis time and is never recomputed — it is
/// copied out of the properties exactly once, in
/// [`from_properties`](StringRecord::from_properties).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StringRecord {
    /// Content address: 64-character lowercase hex SHA-256 digest of
    /// `value`. Identical values always carry identical ids, which is what
    /// the store's deduplication keys on.
    pub id: String,

    /// The original string, verbatim — whitespace, punctuation, and all.
    /// Kept with the record but deliberately absent from the wire shape:
    /// responses carry the content hash and the derived properties, not
    /// the content itself.
    #[serde(skip)]
    pub value: String,

    /// Derived structural properties. Deterministic function of `value`.
    pub properties: StringProperties,

    /// UTC timestamp assigned when the record was created. Serializes as
    /// RFC 3339 with a `Z` suffix.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a value and its already-computed properties,
    /// stamping the creation time.
    pub fn from_properties(value: String, properties: StringProperties) -> Self {
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }

    /// Analyze a value and wrap the result in a record. This is the normal
    /// construction path: raw string -> analyzer -> record -> store.
    pub fn analyze(value: &str) -> Self {
        Self::from_properties(value.to_string(), analyze(value))
    }
}
