// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! Environment variables are bound to configuration keys automatically: the key
//! `verification.daily_limit` is read from `REGISTRATION_VERIFICATION_DAILY_LIMIT`.
//! Lookups go to the process environment on every call, so values always
//! reflect the current environment.

use crate::domain::options::{ENV_PREFIX, OPTIONS};
use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::source::PRIORITY_ENV;
use crate::ports::ConfigSource;
use std::env;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration source adapter for prefixed environment variables.
///
/// Empty variables are treated as unset.
///
/// # Priority
///
/// Environment variables have a priority of 2: they override the config map and
/// the defaults, and are overridden by the configuration file.
///
/// # Examples
///
/// ```rust
/// use registration_config::adapters::EnvVarAdapter;
/// use registration_config::domain::ConfigKey;
///
/// let adapter = EnvVarAdapter::with_prefix("MYAPP");
/// assert_eq!(
///     adapter.env_var_name(&ConfigKey::from("log.level")),
///     "MYAPP_LOG_LEVEL"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Prefix joined to every variable name with an underscore
    prefix: String,
    /// Keys reported by `all_keys` when their variable is set
    bound_keys: Vec<ConfigKey>,
}

impl EnvVarAdapter {
    /// Creates an adapter using the registration service prefix, bound to every recognized option.
    pub fn new() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Creates an adapter with a custom prefix, bound to every recognized option.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            bound_keys: OPTIONS.iter().map(|o| ConfigKey::from(o.key)).collect(),
        }
    }

    /// Adds keys that `all_keys` should report when their variable is set.
    ///
    /// Lookups through `get` work for any key regardless of binding.
    pub fn bind_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ConfigKey>,
    {
        for key in keys {
            let key = key.into();
            if !self.bound_keys.contains(&key) {
                self.bound_keys.push(key);
            }
        }
        self
    }

    /// Returns the prefix in use.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the environment variable name bound to `key`.
    pub fn env_var_name(&self, key: &ConfigKey) -> String {
        key.env_var_name(&self.prefix)
    }

    fn lookup(&self, key: &ConfigKey) -> Option<String> {
        let name = self.env_var_name(key);
        let value = match env::var(&name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!("Skipping non-unicode environment variable {}", name);
                return None;
            }
        };
        if value.is_empty() {
            return None;
        }
        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable {}: value_len={} (max {})",
                name,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return None;
        }
        Some(value)
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        PRIORITY_ENV
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.lookup(key).map(ConfigValue::from))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .bound_keys
            .iter()
            .filter(|key| self.lookup(key).is_some())
            .cloned()
            .collect())
    }
}
