// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.
//!
//! Keys are dot-separated hierarchical names such as `verification.daily_limit`.
//! They are case-insensitive: every key is stored lower-cased so that values
//! coming from YAML files, config maps and code all meet on the same spelling.

use std::fmt;

/// A type-safe, normalized configuration key.
///
/// # Examples
///
/// ```
/// use registration_config::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("Verification.Daily_Limit");
/// assert_eq!(key.as_str(), "verification.daily_limit");
/// assert_eq!(key.env_var_name("REGISTRATION"), "REGISTRATION_VERIFICATION_DAILY_LIMIT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey`, trimming surrounding whitespace and lower-casing it.
    pub fn new(key: impl AsRef<str>) -> Self {
        ConfigKey(key.as_ref().trim().to_lowercase())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the name of the environment variable bound to this key.
    ///
    /// The key is upper-cased, dots become underscores, and the result is joined
    /// to `prefix` with an underscore. An empty prefix yields the bare name.
    ///
    /// ```
    /// use registration_config::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("http.address");
    /// assert_eq!(key.env_var_name("REGISTRATION"), "REGISTRATION_HTTP_ADDRESS");
    /// assert_eq!(key.env_var_name(""), "HTTP_ADDRESS");
    /// ```
    pub fn env_var_name(&self, prefix: &str) -> String {
        let name = self.0.replace('.', "_").to_uppercase();
        if prefix.is_empty() {
            name
        } else {
            format!("{}_{}", prefix, name)
        }
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
