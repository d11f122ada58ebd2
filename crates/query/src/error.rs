//! Error types for filter validation and query interpretation.

use thiserror::Error;

/// Errors raised while validating a filter or interpreting a query phrase.
///
/// All variants describe invalid caller input, never internal faults; the
/// boundary maps each to a client-error status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// The requested length window is inverted.
    #[error("minLength {min} must not be greater than maxLength {max}")]
    InvalidRange { min: usize, max: usize },

    /// The character filter was not exactly one character.
    #[error("containsCharacter must be exactly one character, got {0:?}")]
    InvalidCharacterFilter(String),

    /// The free-text query matched none of the interpreter's rules.
    /// [`interpret`](crate::interpret) itself never fails — this is what
    /// the boundary raises when it receives back an empty filter.
    #[error("query did not match any known filter pattern")]
    Uninterpretable,
}
