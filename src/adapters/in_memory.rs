// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader returning a fixed set of values.

use crate::domain::Result;
use crate::ports::{ConfigMapLoader, SecretLoader};
use std::collections::HashMap;

/// A secret or config map loader backed by a map held in memory.
///
/// Useful when the values are already known, e.g. when embedding the facade or
/// in tests. [`InMemoryLoader::empty`] stands in for an absent resource.
///
/// # Examples
///
/// ```rust
/// use registration_config::adapters::InMemoryLoader;
/// use registration_config::ports::SecretLoader;
///
/// let loader = InMemoryLoader::from_pairs([("twilio.account.sid", "AC123")]);
/// assert_eq!(loader.load_secret().unwrap()["twilio.account.sid"], "AC123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    values: HashMap<String, String>,
}

impl InMemoryLoader {
    /// Creates a loader returning `values`.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Creates a loader that returns no values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a loader from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl SecretLoader for InMemoryLoader {
    fn load_secret(&self) -> Result<HashMap<String, String>> {
        Ok(self.values.clone())
    }
}

impl ConfigMapLoader for InMemoryLoader {
    fn load_config_map(&self) -> Result<HashMap<String, String>> {
        Ok(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_loader() {
        let loader = InMemoryLoader::empty();
        assert!(loader.load_secret().unwrap().is_empty());
        assert!(loader.load_config_map().unwrap().is_empty());
    }

    #[test]
    fn test_from_pairs() {
        let loader = InMemoryLoader::from_pairs([("namespace", "sandbox"), ("log.level", "debug")]);
        let values = loader.load_config_map().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["namespace"], "sandbox");
    }
}
