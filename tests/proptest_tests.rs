// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check key normalization, environment variable naming and the
//! value conversions against arbitrary inputs.

use registration_config::adapters::EnvVarAdapter;
use registration_config::domain::{ConfigKey, ConfigValue};
use proptest::prelude::*;
use std::time::Duration;

// Keys are normalized to trimmed lower case
proptest! {
    #[test]
    fn test_config_key_normalized(s in "[A-Za-z0-9_.]{1,40}") {
        let key = ConfigKey::from(format!("  {}  ", s));
        prop_assert_eq!(key.as_str(), s.to_lowercase());
    }
}

// Dotted keys map to PREFIX_SEGMENT_SEGMENT
proptest! {
    #[test]
    fn test_env_var_name_mapping(
        segments in prop::collection::vec("[a-z][a-z0-9_]{0,10}", 1..5)
    ) {
        let key = ConfigKey::from(segments.join("."));
        let adapter = EnvVarAdapter::with_prefix("REGISTRATION");
        let expected = format!("REGISTRATION_{}", segments.join("_").to_uppercase());
        prop_assert_eq!(adapter.env_var_name(&key), expected);
    }
}

// The variable name never contains a dot and is upper case
proptest! {
    #[test]
    fn test_env_var_name_is_upper_without_dots(s in "[a-z0-9_.]{1,40}") {
        let name = ConfigKey::from(s).env_var_name("REGISTRATION");
        prop_assert!(!name.contains('.'));
        prop_assert_eq!(name.clone(), name.to_uppercase());
    }
}

// Splitting a joined list gives back the non-empty trimmed elements
proptest! {
    #[test]
    fn test_list_split_roundtrip(
        items in prop::collection::vec("[a-z0-9.-]{0,12}", 0..8),
        padding in " {0,3}"
    ) {
        let joined = items
            .iter()
            .map(|item| format!("{}{}{}", padding, item, padding))
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<String> = items.into_iter().filter(|i| !i.is_empty()).collect();
        prop_assert_eq!(ConfigValue::from(joined).as_list(), expected);
    }
}

// List elements are never empty and never carry surrounding whitespace
proptest! {
    #[test]
    fn test_list_elements_trimmed(s in "[a-z ,]{0,60}") {
        for item in ConfigValue::from(s).as_list() {
            prop_assert!(!item.is_empty());
            prop_assert_eq!(item.trim(), item.as_str());
        }
    }
}

// Whole seconds, minutes and hours parse exactly
proptest! {
    #[test]
    fn test_duration_units(n in 0u64..100_000) {
        prop_assert_eq!(
            ConfigValue::from(format!("{}s", n)).as_duration("d").unwrap(),
            Duration::from_secs(n)
        );
        prop_assert_eq!(
            ConfigValue::from(format!("{}m", n)).as_duration("d").unwrap(),
            Duration::from_secs(n * 60)
        );
        prop_assert_eq!(
            ConfigValue::from(format!("{}h", n)).as_duration("d").unwrap(),
            Duration::from_secs(n * 3600)
        );
        prop_assert_eq!(
            ConfigValue::from(format!("{}ms", n)).as_duration("d").unwrap(),
            Duration::from_millis(n)
        );
    }
}

// Compound durations add up their components
proptest! {
    #[test]
    fn test_duration_compound(h in 0u64..100, m in 0u64..60, s in 0u64..60) {
        let value = ConfigValue::from(format!("{}h{}m{}s", h, m, s));
        prop_assert_eq!(
            value.as_duration("d").unwrap(),
            Duration::from_secs(h * 3600 + m * 60 + s)
        );
    }
}

// Negative durations are rejected
proptest! {
    #[test]
    fn test_negative_duration_rejected(n in 1u64..100_000) {
        let value = ConfigValue::from(format!("-{}s", n));
        prop_assert!(value.as_duration("d").is_err());
    }
}

// Integers survive a round trip through their decimal form
proptest! {
    #[test]
    fn test_integer_parsing(n in any::<i64>()) {
        prop_assert_eq!(ConfigValue::from(n.to_string()).as_i64("i").unwrap(), n);
    }
}

// Any casing of the accepted boolean words parses
proptest! {
    #[test]
    fn test_bool_words_case_insensitive(
        word in prop::sample::select(vec!["true", "t", "yes", "1", "on", "false", "f", "no", "0", "off"]),
        upper in any::<bool>()
    ) {
        let expected = matches!(word, "true" | "t" | "yes" | "1" | "on");
        let input = if upper { word.to_uppercase() } else { word.to_string() };
        prop_assert_eq!(ConfigValue::from(input).as_bool("b").unwrap(), expected);
    }
}
