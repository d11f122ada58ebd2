//! Stringprops analysis layer.
//!
//! This crate maps a raw string to its structural properties: length,
//! palindrome status, unique character count, word count, a SHA-256 content
//! hash, and a per-character frequency map. The hash doubles as the record
//! identifier downstream, so everything here has to be deterministic.
//!
//! ## Pure function guarantee
//!
//! [`analyze`] performs no I/O, no clock calls, and has no OS/locale
//! dependence. It is total over all strings: empty input, whitespace-only
//! input, and arbitrary Unicode all produce a well-formed
//! [`StringProperties`] rather than an error.
//!
//! ## Invariants worth knowing
//!
//! - `sha256_hash` is computed over the *raw* UTF-8 bytes of the input;
//!   no normalization happens before hashing.
//! - The palindrome check runs over a normalized form (lowercased, all
//!   non-alphanumeric characters removed); every other property is
//!   computed over the raw string.
//! - The values of `character_frequency` always sum to `length`, and its
//!   key set is exactly the set of distinct characters in the input.
//!
//! Bottom line: same input = same properties forever.

mod analyze;
mod hash;
mod normalize;
mod properties;

pub use crate::analyze::analyze;
pub use crate::hash::sha256_hex;
pub use crate::normalize::{is_palindrome, normalize_for_palindrome};
pub use crate::properties::StringProperties;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_basic_sentence() {
        let props = analyze("hello world");

        assert_eq!(props.length, 11);
        assert_eq!(props.word_count, 2);
        assert_eq!(props.unique_characters, 8); // h e l o space w r d
        assert!(!props.is_palindrome);
        assert_eq!(
            props.sha256_hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn analyze_is_deterministic() {
        let a = analyze("The quick brown fox");
        let b = analyze("The quick brown fox");
        assert_eq!(a, b);
    }

    #[test]
    fn hash_is_64_lowercase_hex_chars() {
        for value in ["", "racecar", "こんにちは世界", "emoji \u{1f600}"] {
            let props = analyze(value);
            assert_eq!(props.sha256_hash.len(), 64);
            assert!(props
                .sha256_hash
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn known_digests_match() {
        assert_eq!(
            analyze("racecar").sha256_hash,
            "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b"
        );
        assert_eq!(
            analyze("").sha256_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn palindrome_examples() {
        assert!(analyze("racecar").is_palindrome);
        assert!(!analyze("hello").is_palindrome);
        // Case folded.
        assert!(analyze("Madam").is_palindrome);
        // Punctuation and spaces stripped.
        assert!(analyze("A man, a plan, a canal: Panama").is_palindrome);
    }

    #[test]
    fn empty_and_whitespace_input_are_total() {
        let empty = analyze("");
        assert_eq!(empty.length, 0);
        assert_eq!(empty.word_count, 0);
        assert_eq!(empty.unique_characters, 0);
        assert!(empty.character_frequency.is_empty());
        // An empty normalized form reads the same forwards and backwards.
        assert!(empty.is_palindrome);

        let blank = analyze(" \t \n ");
        assert_eq!(blank.length, 5);
        assert_eq!(blank.word_count, 0);
        assert!(blank.is_palindrome);
    }

    #[test]
    fn frequency_sum_equals_length() {
        for value in ["", "aab", "hello world", "Madam, I'm Adam.", "αββγ 😀😀"] {
            let props = analyze(value);
            assert_eq!(props.character_frequency.values().sum::<usize>(), props.length);
            assert_eq!(props.character_frequency.len(), props.unique_characters);
        }
    }

    #[test]
    fn frequency_counts_raw_characters() {
        let props = analyze("aA b!b");
        assert_eq!(props.character_frequency.get(&'a'), Some(&1));
        assert_eq!(props.character_frequency.get(&'A'), Some(&1));
        assert_eq!(props.character_frequency.get(&'b'), Some(&2));
        assert_eq!(props.character_frequency.get(&' '), Some(&1));
        assert_eq!(props.character_frequency.get(&'!'), Some(&1));
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        let props = analyze("héllo");
        assert_eq!(props.length, 5);

        let props = analyze("😀😀");
        assert_eq!(props.length, 2);
        assert_eq!(props.unique_characters, 1);
    }

    #[test]
    fn word_count_splits_on_any_whitespace_run() {
        assert_eq!(analyze("one").word_count, 1);
        assert_eq!(analyze("  two\twords \n").word_count, 2);
        assert_eq!(analyze("a b c d").word_count, 4);
    }

    #[test]
    fn properties_serialize_camel_case() {
        let props = analyze("ab");
        let json = serde_json::to_value(&props).expect("properties serialize");

        assert_eq!(json["length"], 2);
        assert_eq!(json["isPalindrome"], false);
        assert_eq!(json["uniqueCharacters"], 2);
        assert_eq!(json["wordCount"], 1);
        assert_eq!(json["characterFrequency"]["a"], 1);
        assert_eq!(json["characterFrequency"]["b"], 1);
        assert_eq!(
            json["sha256Hash"].as_str().map(str::len),
            Some(64)
        );
    }
}
