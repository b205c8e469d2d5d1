// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from a YAML
//! file once, when the adapter is created.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::source::PRIORITY_FILE;
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// Nested mappings are flattened into dot-notation keys, and keys are
/// lower-cased. A sequence is flattened element by element (`key.0`,
/// `key.1`, ...); when all its elements are scalars it is also joined with
/// commas under the parent key, so lists can be written either way.
///
/// # Examples
///
/// ```rust
/// use registration_config::adapters::YamlParser;
/// use registration_config::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "http:\n  address: 0.0.0.0:9090\nverification:\n  excluded_email_domains:\n    - redhat.com\n    - ibm.com";
/// let result = parser.parse(yaml_content).unwrap();
/// assert_eq!(result.get("http.address"), Some(&"0.0.0.0:9090".to_string()));
/// assert_eq!(
///     result.get("verification.excluded_email_domains"),
///     Some(&"redhat.com,ibm.com".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn scalar(value: &serde_yaml::Value) -> Option<String> {
        match value {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn join(prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_lowercase()
        } else {
            format!("{}.{}", prefix, key.to_lowercase())
        }
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    let key_str = match key {
                        serde_yaml::Value::String(s) => s.clone(),
                        other => match Self::scalar(other) {
                            Some(s) => s,
                            None => continue,
                        },
                    };
                    Self::flatten_yaml(val, &Self::join(prefix, &key_str), result);
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                // Null entries are absent, like null mapping values
                let scalars: Option<Vec<String>> = seq
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(Self::scalar)
                    .collect();
                if let Some(scalars) = scalars.filter(|s| !s.is_empty()) {
                    result.insert(prefix.to_string(), scalars.join(","));
                }
                for (i, val) in seq.iter().enumerate() {
                    Self::flatten_yaml(val, &Self::join(prefix, &i.to_string()), result);
                }
            }
            serde_yaml::Value::Tagged(tagged) => {
                Self::flatten_yaml(&tagged.value, prefix, result);
            }
            scalar => {
                if let Some(s) = Self::scalar(scalar) {
                    if !prefix.is_empty() {
                        result.insert(prefix.to_string(), s);
                    }
                }
            }
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Mapping(_) | serde_yaml::Value::Null => {}
            _ => {
                return Err(ConfigError::ParseError {
                    message: "YAML configuration must be a mapping at the top level".to_string(),
                    source: None,
                })
            }
        }

        let mut result = HashMap::new();
        Self::flatten_yaml(&value, "", &mut result);
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration source adapter for a YAML file.
///
/// The file is read and parsed once, in [`YamlFileAdapter::from_file`].
///
/// # Priority
///
/// The YAML file has a priority of 3, the highest of the registration service
/// sources: it overrides environment variables, the config map and defaults.
///
/// # Examples
///
/// ```rust,no_run
/// use registration_config::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/etc/registration-service/config.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed configuration values
    values: HashMap<ConfigKey, ConfigValue>,
}

impl YamlFileAdapter {
    /// Reads and parses the YAML file at `path`.
    ///
    /// Fails if the file is missing, unreadable, larger than 10MB or not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let canonical_path = file_path.canonicalize().map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(&file_path)),
            source: Some(Box::new(e)),
        })?;

        // Check file size before reading
        let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Failed to read file metadata: {}",
                display_name(&canonical_path)
            ),
            source: Some(Box::new(e)),
        })?;

        if !metadata.is_file() {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!("Not a regular file: {}", display_name(&canonical_path)),
                source: None,
            });
        }

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Failed to read configuration file: {}",
                display_name(&canonical_path)
            ),
            source: Some(Box::new(e)),
        })?;

        let values = YamlParser::new()
            .parse(&content)?
            .into_iter()
            .map(|(k, v)| (ConfigKey::from(k), ConfigValue::from(v)))
            .collect::<HashMap<_, _>>();

        tracing::debug!(
            "Loaded {} values from configuration file {}",
            values.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            values,
        })
    }

    /// Returns the canonical path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn priority(&self) -> u8 {
        PRIORITY_FILE
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self.values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_yaml_parser_nested() {
        let yaml = r#"
http:
  address: 127.0.0.1:8443
  compress: false
  idle_timeout: 30s
verification:
  daily_limit: 10
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("http.address"), Some(&"127.0.0.1:8443".to_string()));
        assert_eq!(result.get("http.compress"), Some(&"false".to_string()));
        assert_eq!(result.get("http.idle_timeout"), Some(&"30s".to_string()));
        assert_eq!(result.get("verification.daily_limit"), Some(&"10".to_string()));
    }

    #[test]
    fn test_yaml_parser_dotted_keys() {
        let result = YamlParser::new().parse("log.level: debug").unwrap();
        assert_eq!(result.get("log.level"), Some(&"debug".to_string()));
    }

    #[test]
    fn test_yaml_parser_lowercases_keys() {
        let result = YamlParser::new().parse("HTTP:\n  Address: x").unwrap();
        assert_eq!(result.get("http.address"), Some(&"x".to_string()));
    }

    #[test]
    fn test_yaml_parser_scalar_sequence() {
        let yaml = "verification:\n  excluded_email_domains: [redhat.com, ibm.com]";
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(
            result.get("verification.excluded_email_domains"),
            Some(&"redhat.com,ibm.com".to_string())
        );
        assert_eq!(
            result.get("verification.excluded_email_domains.1"),
            Some(&"ibm.com".to_string())
        );
    }

    #[test]
    fn test_yaml_parser_block_scalar() {
        let yaml = "auth_client:\n  config:\n    raw: |\n      {\"realm\": \"sandbox\"}\n";
        let result = YamlParser::new().parse(yaml).unwrap();
        assert_eq!(
            result.get("auth_client.config.raw"),
            Some(&"{\"realm\": \"sandbox\"}\n".to_string())
        );
    }

    #[test]
    fn test_yaml_parser_null_values_are_absent() {
        let yaml = "woopra:\n  domain:\nnamespace: ~\nsegment:\n  write_key: \"\"\n";
        let result = YamlParser::new().parse(yaml).unwrap();
        assert!(!result.contains_key("woopra.domain"));
        assert!(!result.contains_key("namespace"));
        assert_eq!(result.get("segment.write_key"), Some(&String::new()));
    }

    #[test]
    fn test_yaml_parser_null_sequence_entries_skipped() {
        let yaml = "domains:\n  - redhat.com\n  -\n  - ibm.com\nempty:\n  - ~\n";
        let result = YamlParser::new().parse(yaml).unwrap();
        assert_eq!(result.get("domains"), Some(&"redhat.com,ibm.com".to_string()));
        assert!(!result.contains_key("domains.1"));
        assert!(!result.contains_key("empty"));
        assert!(!result.contains_key("empty.0"));
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        let result = YamlParser::new().parse("").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse("http: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_rejects_top_level_scalar() {
        let result = YamlParser::new().parse("just a string");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_extensions() {
        assert_eq!(YamlParser::new().supported_extensions(), &["yaml", "yml"]);
    }

    #[test]
    fn test_yaml_file_adapter() {
        let file = yaml_file("environment: dev\nnamespace: sandbox\n");
        let adapter = YamlFileAdapter::from_file(file.path()).unwrap();

        assert_eq!(adapter.name(), "yaml-file");
        assert_eq!(adapter.priority(), PRIORITY_FILE);
        assert_eq!(
            adapter.get_str("environment").unwrap().unwrap().as_str(),
            "dev"
        );
        assert_eq!(adapter.all_keys().unwrap().len(), 2);
        assert!(adapter.get_str("log.level").unwrap().is_none());
    }

    #[test]
    fn test_yaml_file_adapter_missing_file() {
        let result = YamlFileAdapter::from_file("/nonexistent/registration/config.yaml");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_yaml_file_adapter_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = YamlFileAdapter::from_file(dir.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_yaml_file_adapter_invalid_content() {
        let file = yaml_file("http:\n  address: [");
        let result = YamlFileAdapter::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_file_adapter_path_is_canonical() {
        let file = yaml_file("log.json: true");
        let adapter = YamlFileAdapter::from_file(file.path()).unwrap();
        assert!(adapter.file_path().is_absolute());
    }
}
