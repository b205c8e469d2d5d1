// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader traits for the external secret and config map.
//!
//! The facade does not know where secrets and config maps live. It asks a
//! `SecretLoader` and a `ConfigMapLoader` once, at construction, and treats
//! any error as fatal.

use crate::domain::Result;
use std::collections::HashMap;

/// Loads the secret mapping that backs the secret-only accessors.
///
/// # Examples
///
/// ```rust
/// use registration_config::ports::SecretLoader;
/// use registration_config::domain::Result;
/// use std::collections::HashMap;
///
/// struct Vault;
///
/// impl SecretLoader for Vault {
///     fn load_secret(&self) -> Result<HashMap<String, String>> {
///         Ok(HashMap::from([("twilio.auth.token".to_string(), "t0k3n".to_string())]))
///     }
/// }
///
/// assert_eq!(Vault.load_secret().unwrap().len(), 1);
/// ```
pub trait SecretLoader {
    /// Returns every key/value pair of the secret.
    fn load_secret(&self) -> Result<HashMap<String, String>>;
}

/// Loads the config map that is layered over the registered defaults.
pub trait ConfigMapLoader {
    /// Returns every key/value pair of the config map.
    fn load_config_map(&self) -> Result<HashMap<String, String>>;
}

impl<T: SecretLoader + ?Sized> SecretLoader for &T {
    fn load_secret(&self) -> Result<HashMap<String, String>> {
        (**self).load_secret()
    }
}

impl<T: ConfigMapLoader + ?Sized> ConfigMapLoader for &T {
    fn load_config_map(&self) -> Result<HashMap<String, String>> {
        (**self).load_config_map()
    }
}

impl<T: SecretLoader + ?Sized> SecretLoader for Box<T> {
    fn load_secret(&self) -> Result<HashMap<String, String>> {
        (**self).load_secret()
    }
}

impl<T: ConfigMapLoader + ?Sized> ConfigMapLoader for Box<T> {
    fn load_config_map(&self) -> Result<HashMap<String, String>> {
        (**self).load_config_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    struct Unreachable;

    impl SecretLoader for Unreachable {
        fn load_secret(&self) -> Result<HashMap<String, String>> {
            Err(ConfigError::SecretLoadError {
                message: "secret store unreachable".to_string(),
                source: None,
            })
        }
    }

    impl ConfigMapLoader for Unreachable {
        fn load_config_map(&self) -> Result<HashMap<String, String>> {
            Err(ConfigError::ConfigMapLoadError {
                message: "config map unreachable".to_string(),
                source: None,
            })
        }
    }

    #[test]
    fn test_loaders_through_references_and_boxes() {
        let by_ref: &dyn SecretLoader = &Unreachable;
        assert!(by_ref.load_secret().is_err());

        let boxed: Box<dyn ConfigMapLoader> = Box::new(Unreachable);
        assert!(boxed.load_config_map().is_err());
    }
}
