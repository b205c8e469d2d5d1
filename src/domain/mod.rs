// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the configuration vocabulary: keys, values, errors, the
//! table of recognized options, secret values, build metadata and the typed
//! accessor trait. It has no knowledge of where values come from.

pub mod build_info;
pub mod config_key;
pub mod config_value;
pub mod configuration;
pub mod errors;
pub mod options;
pub mod secrets;

// Re-export commonly used types
pub use build_info::BuildInfo;
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use configuration::Configuration;
pub use errors::{ConfigError, Result};
pub use secrets::SecretValues;
