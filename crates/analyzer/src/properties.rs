//! The analysis result type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structural properties of a single string.
///
/// Produced exclusively by [`analyze()`](crate::analyze) and deterministic
/// for a given input: same string = same `StringProperties` on any
/// machine, at any time. The `sha256_hash` field is the content address
/// used as the record identifier downstream.
///
/// # Structure
///
/// ```text
/// StringProperties
/// ├── length: usize                           # code points in the raw string
/// ├── is_palindrome: bool                     # checked over the normalized form
/// ├── unique_characters: usize                # distinct raw characters
/// ├── word_count: usize                       # whitespace-delimited tokens
/// ├── sha256_hash: String                     # 64-char lowercase hex digest
/// └── character_frequency: BTreeMap<char, _>  # raw character -> occurrences
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StringProperties {
    /// Number of Unicode code points in the raw string. This is a character
    /// count, not a byte count: `"é"` and `"😀"` each contribute one.
    pub length: usize,

    /// Whether the string reads the same forwards and backwards after
    /// normalization (lowercased, non-alphanumerics removed). See
    /// [`is_palindrome()`](crate::is_palindrome).
    pub is_palindrome: bool,

    /// Count of distinct raw characters. Always equals the key count of
    /// `character_frequency`.
    pub unique_characters: usize,

    /// Number of maximal non-whitespace runs when splitting on Unicode
    /// whitespace. Empty and whitespace-only strings have zero words.
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the raw UTF-8 bytes. See
    /// [`sha256_hex()`](crate::sha256_hex).
    pub sha256_hash: String,

    /// Occurrence count for every raw character, spaces and punctuation
    /// included. The values sum to `length`. Ordered map so serialized
    /// output is deterministic.
    pub character_frequency: BTreeMap<char, usize>,
}
