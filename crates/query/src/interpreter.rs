//! Heuristic phrase-to-filter interpretation.
//!
//! [`interpret`] translates a free-text phrase like "palindromic strings
//! longer than 10" into a [`FilterSpec`]. This is a fixed, ordered set of
//! pattern-matching rules, not language understanding: each rule looks for
//! one phrase shape and sets one filter field.
//!
//! The rules live in [`RULES`], an explicit table evaluated top to bottom.
//! A rule never overwrites a field an earlier rule already set, so the
//! table order *is* the precedence order, and within one rule the first
//! occurrence scanning left to right wins. Conflicting phrasings are
//! therefore resolved deterministically, never merged.
//!
//! Matching is case-insensitive; the input is lowercased once up front.
//! Unmatched input produces an empty spec — the interpreter itself never
//! fails.

use crate::spec::FilterSpec;

/// One interpretation rule: a named pattern that may set a single filter
/// field when its phrase shape occurs in the query.
struct Rule {
    /// Stable name, used in trace output and tests.
    name: &'static str,
    apply: fn(&QueryText, &mut FilterSpec),
}

/// The rule table, in precedence order.
///
/// 1. "palindrome"/"palindromic" -> `is_palindrome = true`
/// 2. word-count phrases ("single word", "one word", "two words",
///    "<N> word(s)") -> `word_count`
/// 3. "longer than <N>" -> `min_length = N + 1`
/// 4. "shorter than <N>" -> `max_length = N - 1`
/// 5. "first vowel" + "contains" -> `contains_character = 'a'`
/// 6. "contain(s|ing) [the] [letter] <X>" -> `contains_character = X`
const RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        apply: rules::palindrome,
    },
    Rule {
        name: "word-count",
        apply: rules::word_count,
    },
    Rule {
        name: "longer-than",
        apply: rules::longer_than,
    },
    Rule {
        name: "shorter-than",
        apply: rules::shorter_than,
    },
    Rule {
        name: "first-vowel",
        apply: rules::first_vowel,
    },
    Rule {
        name: "contains-letter",
        apply: rules::contains_letter,
    },
];

/// Names of all rules in evaluation order. Exposed so the precedence
/// order is auditable from outside the crate.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Translate a free-text phrase into a filter.
///
/// Returns an empty [`FilterSpec`] when no rule fires; callers that need
/// to reject uninterpretable queries check
/// [`FilterSpec::is_empty`](crate::FilterSpec::is_empty) themselves.
///
/// # Examples
///
/// ```rust
/// use query::interpret;
///
/// let spec = interpret("all palindromic strings longer than 10");
/// assert_eq!(spec.is_palindrome, Some(true));
/// assert_eq!(spec.min_length, Some(11));
///
/// assert!(interpret("gibberish with no patterns").is_empty());
/// ```
pub fn interpret(text: &str) -> FilterSpec {
    let query = QueryText::new(text);
    let mut spec = FilterSpec::default();
    for rule in RULES {
        (rule.apply)(&query, &mut spec);
    }
    spec
}

/// Pre-processed query text shared by all rules: the lowercased phrase
/// plus its whitespace tokens with surrounding punctuation stripped.
struct QueryText {
    text: String,
    tokens: Vec<String>,
}

impl QueryText {
    fn new(input: &str) -> Self {
        let text = input.to_lowercase();
        let tokens = text
            .split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .collect();
        Self { text, tokens }
    }

    fn contains_phrase(&self, phrase: &str) -> bool {
        self.text.contains(phrase)
    }

    /// First `N` such that tokens `first second <N>` appear in sequence.
    fn number_after_pair(&self, first: &str, second: &str) -> Option<usize> {
        self.tokens.windows(3).find_map(|window| {
            (window[0] == first && window[1] == second)
                .then(|| window[2].parse().ok())
                .flatten()
        })
    }
}

mod rules {
    use super::{FilterSpec, QueryText};

    pub(super) fn palindrome(query: &QueryText, spec: &mut FilterSpec) {
        if spec.is_palindrome.is_some() {
            return;
        }
        if query.contains_phrase("palindrome") || query.contains_phrase("palindromic") {
            spec.is_palindrome = Some(true);
        }
    }

    pub(super) fn word_count(query: &QueryText, spec: &mut FilterSpec) {
        if spec.word_count.is_some() {
            return;
        }
        if query.contains_phrase("single word") || query.contains_phrase("one word") {
            spec.word_count = Some(1);
            return;
        }
        if query.contains_phrase("two word") {
            spec.word_count = Some(2);
            return;
        }
        // Generic "<N> word(s)": first occurrence scanning left to right.
        spec.word_count = query.tokens.windows(2).find_map(|window| {
            (window[1] == "word" || window[1] == "words")
                .then(|| window[0].parse().ok())
                .flatten()
        });
    }

    pub(super) fn longer_than(query: &QueryText, spec: &mut FilterSpec) {
        if spec.min_length.is_some() {
            return;
        }
        // "longer than 10" is a strict bound; the filter window is
        // inclusive, hence the + 1.
        spec.min_length = query
            .number_after_pair("longer", "than")
            .map(|n: usize| n + 1);
    }

    pub(super) fn shorter_than(query: &QueryText, spec: &mut FilterSpec) {
        if spec.max_length.is_some() {
            return;
        }
        spec.max_length = query
            .number_after_pair("shorter", "than")
            .map(|n: usize| n.saturating_sub(1));
    }

    pub(super) fn first_vowel(query: &QueryText, spec: &mut FilterSpec) {
        if spec.contains_character.is_some() {
            return;
        }
        if query.contains_phrase("first vowel") && query.contains_phrase("contains") {
            spec.contains_character = Some('a');
        }
    }

    pub(super) fn contains_letter(query: &QueryText, spec: &mut FilterSpec) {
        if spec.contains_character.is_some() {
            return;
        }
        let tokens = &query.tokens;
        for (i, token) in tokens.iter().enumerate() {
            if token != "contain" && token != "contains" && token != "containing" {
                continue;
            }
            let mut j = i + 1;
            for filler in ["the", "letter"] {
                if tokens.get(j).is_some_and(|t| t == filler) {
                    j += 1;
                }
            }
            if let Some(candidate) = tokens.get(j) {
                let mut chars = candidate.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if c.is_alphabetic() {
                        spec.contains_character = Some(c);
                        return;
                    }
                }
            }
        }
    }
}
