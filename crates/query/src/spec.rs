//! The filter specification type.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A structured filter over stored records.
///
/// Ephemeral: constructed per query (either directly from request
/// parameters or by the interpreter) and never persisted. Every field is
/// optional; an unset field imposes no constraint, so the default spec
/// matches everything. Set fields compose with logical AND.
///
/// Serialized with camelCase names and absent fields omitted, which makes
/// the serialized form usable verbatim as the `interpretedQuery` echo in
/// responses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Exact match on the palindrome property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on character length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Exact match on the word count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Record must contain this character at least once (case-sensitive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// Whether no field is set. An empty spec matches every record; the
    /// boundary treats an empty *interpreted* spec as an uninterpretable
    /// query.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Validate cross-field consistency: the length window must not be
    /// inverted.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(QueryError::InvalidRange { min, max });
            }
        }
        Ok(())
    }
}

/// Parse a raw `containsCharacter` parameter into a single character.
///
/// The wire value is a string; anything other than exactly one character
/// is rejected with [`QueryError::InvalidCharacterFilter`]. Multi-byte
/// characters count as one: `"é"` and `"😀"` are valid filters.
pub fn parse_contains_character(raw: &str) -> Result<char, QueryError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(QueryError::InvalidCharacterFilter(raw.to_string())),
    }
}
