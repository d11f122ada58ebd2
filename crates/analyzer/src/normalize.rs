//! Palindrome normalization.
//!
//! The palindrome check does not run over the raw string. The input is
//! first case-folded to lowercase, then every character that is not a
//! letter or digit is removed; the check compares that normalized sequence
//! to its reverse. "A man, a plan, a canal: Panama" is a palindrome under
//! this definition; `"ab ba"` and `"AbBa"` are too.
//!
//! Normalization is only ever applied to the palindrome check. Length,
//! frequency, and hashing all see the raw string.

/// Produce the normalized form used by the palindrome check: lowercase,
/// with all non-alphanumeric characters removed.
///
/// Alphanumeric follows the Unicode definition (`char::is_alphanumeric`),
/// so letters and digits from any script survive normalization.
///
/// # Examples
///
/// ```rust
/// use analyzer::normalize_for_palindrome;
///
/// assert_eq!(normalize_for_palindrome("A man, a plan"), "amanaplan");
/// assert_eq!(normalize_for_palindrome("  \t"), "");
/// ```
pub fn normalize_for_palindrome(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Check whether a string reads the same forwards and backwards after
/// normalization.
///
/// The empty string (and any string whose normalized form is empty, such
/// as pure punctuation or whitespace) is considered a palindrome: the
/// empty sequence equals its own reverse.
pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = normalize_for_palindrome(value).chars().collect();
    normalized.iter().eq(normalized.iter().rev())
}
