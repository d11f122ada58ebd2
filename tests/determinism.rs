//! Determinism and identity guarantees for the analysis layer.

use stringprops::{analyze, StringRecord};

#[test]
fn analyze_twice_yields_identical_properties() {
    for value in [
        "",
        "racecar",
        "A man, a plan, a canal: Panama",
        "  mixed \t whitespace \n ",
        "こんにちは世界",
    ] {
        let first = analyze(value);
        let second = analyze(value);
        assert_eq!(first, second, "analysis diverged for {value:?}");
    }
}

#[test]
fn id_is_the_sha256_of_the_raw_value() {
    let record = StringRecord::analyze("racecar");
    assert_eq!(
        record.id,
        "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b"
    );

    let record = StringRecord::analyze("hello");
    assert_eq!(
        record.id,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn id_format_holds_for_arbitrary_input() {
    for value in ["", "a", "two words", "punctuation!?", "emoji \u{1f600}"] {
        let record = StringRecord::analyze(value);
        assert_eq!(record.id.len(), 64);
        assert!(record
            .id
            .chars()
            .all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn identical_values_share_an_id_distinct_values_do_not() {
    let a = StringRecord::analyze("shared value");
    let b = StringRecord::analyze("shared value");
    let c = StringRecord::analyze("shared value!");

    assert_eq!(a.id, b.id);
    assert_ne!(a.id, c.id);
}

#[test]
fn frequency_invariants_hold() {
    for value in ["", "aaa", "abcabc", "spaces  count", "Üni çöde"] {
        let props = analyze(value);
        assert_eq!(
            props.character_frequency.values().sum::<usize>(),
            props.length,
            "frequency sum mismatch for {value:?}"
        );
        let distinct: std::collections::BTreeSet<char> = value.chars().collect();
        let keys: std::collections::BTreeSet<char> =
            props.character_frequency.keys().copied().collect();
        assert_eq!(keys, distinct, "key set mismatch for {value:?}");
    }
}

#[test]
fn record_wire_shape_is_camel_case_with_utc_timestamp() {
    let record = StringRecord::analyze("wire check");
    let json = serde_json::to_value(&record).expect("record serializes");

    assert_eq!(json["id"], json["properties"]["sha256Hash"]);
    assert_eq!(json["properties"]["length"], 10);
    assert_eq!(json["properties"]["wordCount"], 2);
    assert_eq!(json["properties"]["isPalindrome"], false);
    assert!(json["properties"]["uniqueCharacters"].is_number());
    assert_eq!(json["properties"]["characterFrequency"]["w"], 1);

    // Exactly the wire fields, nothing more: the raw value stays private
    // to the store.
    let mut keys: Vec<&str> = json
        .as_object()
        .expect("record is an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["createdAt", "id", "properties"]);

    let created_at = json["createdAt"].as_str().expect("createdAt is a string");
    assert!(
        created_at.ends_with('Z'),
        "timestamp should carry a Z suffix: {created_at}"
    );
}
