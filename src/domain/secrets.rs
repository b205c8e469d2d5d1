// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret values held apart from the layered configuration.

use std::collections::HashMap;
use std::fmt;

/// Key/value pairs loaded once from the secret store.
///
/// These never take part in the precedence merge and never show up in the
/// resolved configuration. `Debug` prints key names only.
///
/// # Examples
///
/// ```
/// use registration_config::domain::SecretValues;
/// use std::collections::HashMap;
///
/// let secrets = SecretValues::new(HashMap::from([
///     ("twilio.auth.token".to_string(), "s3cr3t".to_string()),
/// ]));
/// assert_eq!(secrets.get("twilio.auth.token"), "s3cr3t");
/// assert_eq!(secrets.get("twilio.account.sid"), "");
/// assert!(!format!("{:?}", secrets).contains("s3cr3t"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretValues(HashMap<String, String>);

impl SecretValues {
    /// Wraps a loaded secret map.
    pub fn new(values: HashMap<String, String>) -> Self {
        SecretValues(values)
    }

    /// Returns the value for `key`, or an empty string when the secret has no such key.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Returns `true` if the secret has a value for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the secret key names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of secret entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no secret values were loaded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys().into_iter().map(|key| (key, "<redacted>")))
            .finish()
    }
}
