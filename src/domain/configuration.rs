// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed accessor interface of the registration service configuration.
//!
//! Accessors are pure reads. They never fail: a missing value resolves to the
//! option's default (or an empty value when there is none).

use std::time::Duration;

/// Typed, read-only view of the registration service configuration.
///
/// Implementations must be safe to share between threads once constructed.
///
/// # Examples
///
/// ```rust
/// use registration_config::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = RegistrationConfig::builder()
///     .with_env_prefix("DOCTEST_CONFIGURATION_TRAIT")
///     .build()?;
/// let config: &dyn Configuration = &config;
///
/// assert_eq!(config.http_address(), "0.0.0.0:8080");
/// assert!(!config.is_testing_mode());
/// # Ok(())
/// # }
/// ```
pub trait Configuration: Send + Sync {
    /// Logs every resolved key/value pair. Secret values are never included.
    fn print_config(&self);

    /// Address the HTTP server binds to, e.g. `0.0.0.0:8080`.
    fn http_address(&self) -> String;

    /// Whether HTTP responses are compressed for clients that accept it.
    fn http_compress_responses(&self) -> bool;

    /// Write timeout for HTTP responses.
    fn http_write_timeout(&self) -> Duration;

    /// Read timeout for HTTP requests.
    fn http_read_timeout(&self) -> Duration;

    /// Idle timeout for HTTP connections.
    fn http_idle_timeout(&self) -> Duration;

    /// Deployment environment such as prod, stage, unit-tests, e2e-tests or dev.
    fn environment(&self) -> String;

    /// Log level filter.
    fn log_level(&self) -> String;

    /// Whether logs are written as JSON.
    fn is_log_json(&self) -> bool;

    /// How long the server waits for existing connections to finish on shutdown.
    fn graceful_timeout(&self) -> Duration;

    /// `true` when running in the `unit-tests` environment.
    fn is_testing_mode(&self) -> bool {
        self.environment() == crate::domain::options::UNIT_TESTS_ENVIRONMENT
    }

    /// Location of the auth client library.
    fn auth_client_library_url(&self) -> String;

    /// Content type of the raw auth client configuration.
    fn auth_client_config_content_type(&self) -> String;

    /// Raw auth client configuration.
    fn auth_client_config_raw(&self) -> String;

    /// Twilio account identifier used to send verification messages.
    fn twilio_account_sid(&self) -> String;

    /// Twilio authentication token used to send verification messages.
    fn twilio_auth_token(&self) -> String;

    /// URL of the identity provider's public signing keys.
    fn auth_client_public_keys_url(&self) -> String;

    /// Namespace the registration service and host operator run in.
    fn namespace(&self) -> String;

    /// Whether phone verification is enabled.
    fn verification_enabled(&self) -> bool;

    /// Verification requests a user may start within a 24 hour period.
    fn verification_daily_limit(&self) -> i64;

    /// Attempts a user gets to enter a code before having to request a new one.
    fn verification_attempts_allowed(&self) -> i64;

    /// Template of the verification SMS; `%s` is replaced with the code.
    fn verification_message_template(&self) -> String;

    /// Email domains for which phone verification is not required.
    fn verification_excluded_email_domains(&self) -> Vec<String>;

    /// Phone number or alphanumeric sender ID for verification messages.
    fn twilio_from_number(&self) -> String;

    /// Minutes before a verification code expires.
    fn verification_code_expires_in_min(&self) -> i64;

    /// Woopra analytics domain.
    fn woopra_domain(&self) -> String;

    /// Segment analytics write key.
    fn segment_write_key(&self) -> String;
}
