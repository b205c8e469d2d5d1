// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global `tracing` subscriber set up from the resolved configuration.

use crate::domain::{ConfigError, Configuration, Result};
use std::io;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs the global subscriber.
///
/// The default level comes from `log.level`; directives in `RUST_LOG` take
/// precedence. Output is JSON when `log.json` is true and plain text otherwise.
/// An unrecognized `log.level` falls back to `info`.
///
/// # Errors
///
/// [`ConfigError::LoggingError`] if a global subscriber is already installed.
pub fn init_logging(config: &dyn Configuration) -> Result<()> {
    let configured = config.log_level();
    let level = parse_level(&configured);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.unwrap_or(Level::INFO).into())
        .from_env_lossy();

    let layer = if config.is_log_json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stdout)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError {
            message: format!("Failed to install subscriber: {}", e),
        })?;

    if level.is_none() {
        tracing::warn!("Unknown log level '{}', using info", configured);
    }
    Ok(())
}

/// Parses a level name as accepted by `log.level`, case-insensitively.
///
/// `warning` is accepted as an alias of `warn`.
fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "warning" => Some(Level::WARN),
        other => Level::from_str(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info"), Some(Level::INFO));
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level(" trace "), Some(Level::TRACE));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }
}
