//! SHA-256 content hashing.
//!
//! The hex digest of a string's raw UTF-8 bytes is the identity of its
//! analysis record: identical inputs always map to the same digest, which
//! is what makes the store content-addressed and deduplicating.

use sha2::{Digest, Sha256};

/// Hash a string with SHA-256 and return a lowercase hex digest.
///
/// The digest is computed over the raw UTF-8 bytes of `value`; no
/// normalization or trimming is applied first.
///
/// # Returns
///
/// A 64-character lowercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use analyzer::sha256_hex;
///
/// let digest = sha256_hex("hello world");
/// assert_eq!(digest.len(), 64);
///
/// // Deterministic
/// assert_eq!(digest, sha256_hex("hello world"));
///
/// // Different inputs produce different digests
/// assert_ne!(digest, sha256_hex("hello world!"));
/// ```
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
