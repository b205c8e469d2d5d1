// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory configuration source.
//!
//! Used for the registered defaults and for the config map layered over them.

use crate::domain::options::OPTIONS;
use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::source::{PRIORITY_CONFIG_MAP, PRIORITY_DEFAULTS};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// A configuration source backed by a fixed map.
///
/// Keys are normalized through [`ConfigKey`] on insertion, so lookups are
/// case-insensitive.
///
/// # Examples
///
/// ```rust
/// use registration_config::adapters::MapSource;
/// use registration_config::ports::ConfigSource;
///
/// let defaults = MapSource::defaults();
/// let value = defaults.get_str("http.address").unwrap().unwrap();
/// assert_eq!(value.as_str(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    priority: u8,
    values: HashMap<ConfigKey, ConfigValue>,
}

impl MapSource {
    /// Creates a source named `name` with the given priority and values.
    pub fn new<K, V>(name: impl Into<String>, priority: u8, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<ConfigKey>,
        V: Into<ConfigValue>,
    {
        Self {
            name: name.into(),
            priority,
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates the lowest-priority source holding the default of every recognized option.
    pub fn defaults() -> Self {
        Self::new(
            "defaults",
            PRIORITY_DEFAULTS,
            OPTIONS.iter().map(|option| (option.key, option.default)),
        )
    }

    /// Creates the source holding the values of a loaded config map.
    pub fn config_map(values: HashMap<String, String>) -> Self {
        Self::new("config-map", PRIORITY_CONFIG_MAP, values)
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the source holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self.values.keys().cloned().collect())
    }
}
