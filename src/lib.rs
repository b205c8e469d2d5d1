// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration facade of the registration service.
//!
//! The registration service reads its settings from several layered sources.
//! This crate resolves them into typed accessors behind the
//! [`Configuration`](domain::Configuration) trait.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `SecretValues`,
//!   `BuildInfo`), the option registry and errors
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`, `SecretLoader`,
//!   `ConfigMapLoader`)
//! - **Adapters**: Defaults, config map, environment, YAML file and mounted
//!   volume implementations
//! - **Service**: `RegistrationConfig`, which stacks the sources
//!
//! # Precedence
//!
//! From highest to lowest: YAML file, `REGISTRATION_*` environment variables,
//! config map, registered defaults. Environment variables are read on every
//! access. Twilio credentials come only from the secret.
//!
//! # Feature Flags
//!
//! - `logging`: `logging::init_logging` via `tracing-subscriber` (default)
//! - `cli`: the `print-config` binary (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use registration_config::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let secret = MountedDirLoader::new(DEFAULT_SECRET_DIR);
//! let config_map = MountedDirLoader::new(DEFAULT_CONFIG_MAP_DIR);
//!
//! let config = RegistrationConfig::new(None, &secret, &config_map)?;
//! config.print_config();
//!
//! let address = config.http_address();
//! let timeout = config.http_read_timeout();
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
#[cfg(feature = "logging")]
pub mod logging;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{
        EnvVarAdapter, InMemoryLoader, MapSource, MountedDirLoader, YamlFileAdapter, YamlParser,
        DEFAULT_CONFIG_MAP_DIR, DEFAULT_SECRET_DIR,
    };
    pub use crate::domain::{
        BuildInfo, ConfigError, ConfigKey, ConfigValue, Configuration, Result, SecretValues,
    };
    pub use crate::ports::{ConfigMapLoader, ConfigParser, ConfigSource, SecretLoader};
    pub use crate::service::{RegistrationConfig, RegistrationConfigBuilder};
}
