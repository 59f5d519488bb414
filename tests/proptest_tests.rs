// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify that parsing never fails on arbitrary input and that
//! serialized configs parse back to the same mapping.

use envsafe::domain::safety::missing_keys;
use envsafe::domain::value::{decode_value, encode_value};
use envsafe::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

const KEY: &str = "[A-Za-z_][A-Za-z0-9_]{0,12}";

// No backslashes, no control characters except newline.
const VALUE: &str = "([^\\\\\\p{Cc}]|\n){0,24}";

// Test that parsing arbitrary text never panics
proptest! {
    #[test]
    fn test_parse_never_panics(text in "\\PC*") {
        let _ = parse(&text);
    }
}

// Test that every parsed key is a valid key
proptest! {
    #[test]
    fn test_parsed_keys_are_valid(text in "[A-Za-z0-9_= '\"#\t\n]{0,80}") {
        for key in parse(&text).keys() {
            let first = key.chars().next().unwrap();
            prop_assert!(first.is_ascii_alphabetic() || first == '_');
            prop_assert_eq!(key.trim(), key);
        }
    }
}

// Test that a single value survives encode then decode
proptest! {
    #[test]
    fn test_value_round_trip(value in VALUE) {
        prop_assert_eq!(decode_value(&encode_value(&value)), value);
    }
}

// Test that stringify then parse yields the same config
proptest! {
    #[test]
    fn test_config_round_trip(entries in prop::collection::hash_map(KEY, VALUE, 0..12)) {
        let config: DotenvConfig = entries.into_iter().collect();
        let text = stringify(&config);
        prop_assert_eq!(parse(&text), config);
    }
}

// Test that serialized output has exactly one line per entry
proptest! {
    #[test]
    fn test_stringify_one_line_per_entry(entries in prop::collection::hash_map(KEY, VALUE, 0..12)) {
        let config: DotenvConfig = entries.into_iter().collect();
        prop_assert_eq!(stringify(&config).lines().count(), config.len());
    }
}

// Test that allowing empty values never reports more missing keys
proptest! {
    #[test]
    fn test_allow_empty_values_is_weaker(
        config in prop::collection::hash_map(KEY, "[a-z]{0,2}", 0..8),
        example in prop::collection::hash_map(KEY, "", 0..8),
    ) {
        let config: DotenvConfig = config.into_iter().collect();
        let example: DotenvConfig = example.into_iter().collect();
        let ambient = HashMap::new();

        let strict = missing_keys(&config, &example, false, &ambient);
        let relaxed = missing_keys(&config, &example, true, &ambient);

        prop_assert!(relaxed.len() <= strict.len());
        for key in &relaxed {
            prop_assert!(strict.contains(key));
        }
    }
}
