// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration file content into flat key/value pairs.
///
/// Nested structures are flattened using dot notation, so
///
/// ```yaml
/// http:
///   address: 0.0.0.0:8080
/// ```
///
/// becomes `http.address` -> `"0.0.0.0:8080"`.
///
/// # Examples
///
/// ```rust
/// use registration_config::ports::ConfigParser;
/// use registration_config::domain::Result;
/// use std::collections::HashMap;
///
/// struct KeyEqualsValue;
///
/// impl ConfigParser for KeyEqualsValue {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let parsed = KeyEqualsValue.parse("log.level = debug").unwrap();
/// assert_eq!(parsed.get("log.level"), Some(&"debug".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a flat key-value map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// File extensions (without the leading dot) this parser understands.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatteningParser;

    impl ConfigParser for FlatteningParser {
        fn parse(&self, _content: &str) -> Result<HashMap<String, String>> {
            let mut map = HashMap::new();
            map.insert("http.address".to_string(), "127.0.0.1:9090".to_string());
            map.insert("log.level".to_string(), "debug".to_string());
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["flat"]
        }
    }

    #[test]
    fn test_flattening_parser() {
        let result = FlatteningParser.parse("").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.get("http.address"),
            Some(&"127.0.0.1:9090".to_string())
        );
        assert_eq!(result.get("log.level"), Some(&"debug".to_string()));
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(FlatteningParser.supported_extensions(), &["flat"]);
    }
}
