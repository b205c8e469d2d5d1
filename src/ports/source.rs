// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! Every layer of the precedence merge (defaults, config map, environment,
//! file) is a `ConfigSource`. The facade queries them highest priority first.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// Priority of the registered defaults.
pub const PRIORITY_DEFAULTS: u8 = 0;
/// Priority of the config map layered over the defaults.
pub const PRIORITY_CONFIG_MAP: u8 = 1;
/// Priority of prefixed environment variables.
pub const PRIORITY_ENV: u8 = 2;
/// Priority of the YAML configuration file.
pub const PRIORITY_FILE: u8 = 3;

/// A trait for configuration sources.
///
/// # Priority
///
/// Each source has a priority value (0-255). Higher priority values take
/// precedence over lower ones. The registration service uses:
///
/// - **3 (highest)**: The YAML configuration file
/// - **2**: Environment variables
/// - **1**: The config map
/// - **0 (lowest)**: Registered defaults
///
/// # Examples
///
/// ```rust
/// use registration_config::ports::ConfigSource;
/// use registration_config::domain::{ConfigKey, ConfigValue, Result};
///
/// struct FixedSource;
///
/// impl ConfigSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok((key.as_str() == "namespace").then(|| ConfigValue::from("sandbox")))
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![ConfigKey::from("namespace")])
///     }
/// }
///
/// let source = FixedSource;
/// assert_eq!(source.get_str("namespace").unwrap().unwrap().as_str(), "sandbox");
/// ```
pub trait ConfigSource: Send + Sync {
    /// Short identifier used in logs and error messages, e.g. "env".
    fn name(&self) -> &str;

    /// Returns the priority of this configuration source.
    fn priority(&self) -> u8;

    /// Retrieves a configuration value for the given key.
    ///
    /// Returns `Ok(None)` when this source has no value for the key.
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Returns all configuration keys this source currently provides.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;

    /// Retrieves a configuration value for the given key string.
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        name: String,
        priority: u8,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            Ok((key.as_str() == "log.level").then(|| ConfigValue::from("debug")))
        }

        fn all_keys(&self) -> Result<Vec<ConfigKey>> {
            Ok(vec![ConfigKey::from("log.level")])
        }
    }

    fn source() -> TestSource {
        TestSource {
            name: "test-source".to_string(),
            priority: PRIORITY_CONFIG_MAP,
        }
    }

    #[test]
    fn test_config_source_name_and_priority() {
        let source = source();
        assert_eq!(source.name(), "test-source");
        assert_eq!(source.priority(), 1);
    }

    #[test]
    fn test_get_str_normalizes_key() {
        let value = source().get_str("LOG.LEVEL").unwrap();
        assert_eq!(value.unwrap().as_str(), "debug");
    }

    #[test]
    fn test_config_source_get_returns_none() {
        assert!(source().get_str("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_priorities_are_ordered() {
        assert!(PRIORITY_FILE > PRIORITY_ENV);
        assert!(PRIORITY_ENV > PRIORITY_CONFIG_MAP);
        assert!(PRIORITY_CONFIG_MAP > PRIORITY_DEFAULTS);
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
    }
}
