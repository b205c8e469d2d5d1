// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! Every source hands values over as strings. `ConfigValue` keeps that string
//! and converts it on demand into the types the accessors expose: booleans,
//! integers, durations and comma-separated lists.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Longest fractional part considered when parsing a duration component.
const MAX_FRACTION_DIGITS: usize = 18;

/// Error returned when a string is not a valid duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{0}'")]
pub struct InvalidDuration(pub String);

/// A configuration value as read from a source.
///
/// # Examples
///
/// ```
/// use registration_config::domain::config_value::ConfigValue;
/// use std::time::Duration;
///
/// let value = ConfigValue::from("1m30s");
/// assert_eq!(value.as_duration("graceful_timeout").unwrap(), Duration::from_secs(90));
///
/// let value = ConfigValue::from("redhat.com,ibm.com");
/// assert_eq!(value.as_list(), vec!["redhat.com", "ibm.com"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the underlying string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "t", "yes", "1", "on"
    /// - `false`: "false", "f", "no", "0", "off"
    ///
    /// ```
    /// use registration_config::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("TRUE").as_bool("http.compress").unwrap());
    /// assert!(!ConfigValue::from("off").as_bool("log.json").unwrap());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.trim().to_lowercase().as_str() {
            "true" | "t" | "yes" | "1" | "on" => Ok(true),
            "false" | "f" | "no" | "0" | "off" => Ok(false),
            _ => Err(ConfigError::invalid_bool(key.to_string(), &self.0)),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a [`Duration`].
    ///
    /// Accepts a sequence of decimal numbers, each with an optional fraction and a
    /// mandatory unit suffix, such as "300ms", "1.5h" or "2h45m". Valid units are
    /// "ns", "us" (or "µs"), "ms", "s", "m" and "h". A bare integer is read as a
    /// number of nanoseconds. Negative durations are rejected.
    pub fn as_duration(&self, key: &str) -> Result<Duration> {
        parse_duration(&self.0).map_err(|e| ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type: "duration".to_string(),
            source: Box::new(e),
        })
    }

    /// Splits the value on commas.
    ///
    /// Each element is trimmed and empty elements are dropped, so an empty value
    /// yields an empty list.
    pub fn as_list(&self) -> Vec<String> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// ```
    /// use registration_config::domain::config_value::ConfigValue;
    /// use std::net::SocketAddr;
    ///
    /// let value = ConfigValue::from("0.0.0.0:8080");
    /// let addr: SocketAddr = value.parse("http.address").unwrap();
    /// assert_eq!(addr.port(), 8080);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}

fn parse_duration(input: &str) -> std::result::Result<Duration, InvalidDuration> {
    let invalid = || InvalidDuration(input.to_string());

    let trimmed = input.trim();
    let mut rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if rest.is_empty() {
        return Err(invalid());
    }
    if rest.bytes().all(|b| b.is_ascii_digit()) {
        return rest
            .parse::<u64>()
            .map(Duration::from_nanos)
            .map_err(|_| invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(invalid)?;

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(invalid)?;
        if !fraction.is_empty() {
            let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let digits: u128 = fraction.parse().map_err(|_| invalid())?;
            let fraction_nanos = digits
                .checked_mul(scale)
                .ok_or_else(invalid)?
                / 10u128.pow(fraction.len() as u32);
            nanos = nanos.checked_add(fraction_nanos).ok_or_else(invalid)?;
        }
        total = total.checked_add(nanos).ok_or_else(invalid)?;
        rest = tail;
    }

    let secs = u64::try_from(total / NANOS_PER_SECOND).map_err(|_| invalid())?;
    Ok(Duration::new(secs, (total % NANOS_PER_SECOND) as u32))
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
