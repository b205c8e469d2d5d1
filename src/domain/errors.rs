// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the registration configuration crate.
//!
//! Construction of the configuration facade is all-or-nothing: every failure
//! surfaces as one of the variants below and is expected to abort startup.

use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use registration_config::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "http.address".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The secret source could not be reached or returned malformed data.
    #[error("Failed to load secret values: {message}")]
    SecretLoadError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxedError>,
    },

    /// The config map source could not be reached or returned malformed data.
    #[error("Failed to load config map: {message}")]
    ConfigMapLoadError {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxedError>,
    },

    /// The configuration file is missing, unreadable or not valid YAML.
    #[error("failed to read config file '{path}': {source}")]
    FileParseError {
        /// The path that was supplied
        path: String,
        /// The underlying cause
        source: BoxedError,
    },

    /// The requested configuration key was not found in any source.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: BoxedError,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxedError>,
    },

    /// Failed to parse configuration content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<BoxedError>,
    },

    /// The global log subscriber could not be installed.
    #[error("Failed to initialize logging: {message}")]
    LoggingError {
        /// The error message
        message: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for a value that is not a recognized boolean.
    pub fn invalid_bool(key: String, value: &str) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: format!("'{}' is not a recognized boolean", value).into(),
        }
    }

    /// Wraps a loader failure as a [`ConfigError::SecretLoadError`].
    ///
    /// Errors that already are secret load errors are passed through unchanged.
    pub fn secret_load(err: ConfigError) -> Self {
        match err {
            err @ ConfigError::SecretLoadError { .. } => err,
            other => ConfigError::SecretLoadError {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Wraps a loader failure as a [`ConfigError::ConfigMapLoadError`].
    ///
    /// Errors that already are config map load errors are passed through unchanged.
    pub fn config_map_load(err: ConfigError) -> Self {
        match err {
            err @ ConfigError::ConfigMapLoadError { .. } => err,
            other => ConfigError::ConfigMapLoadError {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }

    /// Wraps a failure to read or parse `path` as a [`ConfigError::FileParseError`].
    pub fn file_parse(path: &Path, err: ConfigError) -> Self {
        ConfigError::FileParseError {
            path: path.display().to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
