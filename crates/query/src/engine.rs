//! Filter evaluation.
//!
//! Pure predicate logic over record snapshots: no I/O, no locks, no
//! mutation. Safe to run against a [`StringStore::list`] snapshot from any
//! number of concurrent callers.
//!
//! [`StringStore::list`]: store::StringStore::list

use store::StringRecord;

use crate::spec::FilterSpec;

/// Evaluate a single record against a filter. Set fields compose with
/// logical AND; an empty spec matches everything.
pub fn matches(record: &StringRecord, spec: &FilterSpec) -> bool {
    let props = &record.properties;

    if let Some(want) = spec.is_palindrome {
        if props.is_palindrome != want {
            return false;
        }
    }
    if let Some(min) = spec.min_length {
        if props.length < min {
            return false;
        }
    }
    if let Some(max) = spec.max_length {
        if props.length > max {
            return false;
        }
    }
    if let Some(words) = spec.word_count {
        if props.word_count != words {
            return false;
        }
    }
    if let Some(c) = spec.contains_character {
        // Membership in the frequency map, i.e. at least one occurrence in
        // the raw value. Case-sensitive.
        if !props.character_frequency.contains_key(&c) {
            return false;
        }
    }

    true
}

/// Filter a snapshot of records, preserving input order.
pub fn apply(records: Vec<StringRecord>, spec: &FilterSpec) -> Vec<StringRecord> {
    records
        .into_iter()
        .filter(|record| matches(record, spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[&str]) -> Vec<StringRecord> {
        values.iter().map(|v| StringRecord::analyze(v)).collect()
    }

    #[test]
    fn empty_spec_returns_input_unchanged() {
        let input = records(&["one", "two words", "racecar"]);
        let output = apply(input.clone(), &FilterSpec::default());
        assert_eq!(output, input);
    }

    #[test]
    fn palindrome_filter_selects_exactly() {
        let input = records(&["racecar", "hello", "Madam"]);
        let spec = FilterSpec {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let values: Vec<_> = apply(input.clone(), &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["racecar", "Madam"]);

        let spec = FilterSpec {
            is_palindrome: Some(false),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["hello"]);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let input = records(&["abcd", "abcde", "abcdef"]);
        let spec = FilterSpec {
            min_length: Some(5),
            max_length: Some(5),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["abcde"]);
    }

    #[test]
    fn predicates_compose_with_and() {
        let input = records(&["racecar", "madam", "deed", "not a palindrome at all"]);
        let spec = FilterSpec {
            is_palindrome: Some(true),
            min_length: Some(5),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        // "deed" is a palindrome but too short; the long one is long enough
        // but no palindrome.
        assert_eq!(values, vec!["racecar", "madam"]);
    }

    #[test]
    fn word_count_is_exact() {
        let input = records(&["one", "two words", "three word phrase"]);
        let spec = FilterSpec {
            word_count: Some(2),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["two words"]);
    }

    #[test]
    fn contains_character_is_case_sensitive() {
        let input = records(&["Zebra", "zebra", "horse"]);

        let spec = FilterSpec {
            contains_character: Some('Z'),
            ..Default::default()
        };
        let values: Vec<_> = apply(input.clone(), &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["Zebra"]);

        let spec = FilterSpec {
            contains_character: Some('z'),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["zebra"]);
    }

    #[test]
    fn contains_character_matches_spaces_and_punctuation() {
        let input = records(&["with space", "none"]);
        let spec = FilterSpec {
            contains_character: Some(' '),
            ..Default::default()
        };
        let values: Vec<_> = apply(input, &spec).into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["with space"]);
    }
}
