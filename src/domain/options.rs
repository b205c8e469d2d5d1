// SPDX-License-Identifier: MIT OR Apache-2.0

//! The recognized registration service options and their defaults.
//!
//! Every option the service understands is listed in [`OPTIONS`]. The defaults
//! source is built from that table, and the accessors fall back to the typed
//! `DEFAULT_*` constants when a configured value cannot be converted.

use std::time::Duration;

/// Prefix prepended to every environment variable name.
pub const ENV_PREFIX: &str = "REGISTRATION";

/// Environment name reserved for unit tests.
pub const UNIT_TESTS_ENVIRONMENT: &str = "unit-tests";

/// Address and port the HTTP server binds to.
pub const HTTP_ADDRESS: &str = "http.address";
/// Default for [`HTTP_ADDRESS`].
pub const DEFAULT_HTTP_ADDRESS: &str = "0.0.0.0:8080";

/// Idle timeout for HTTP connections.
pub const HTTP_IDLE_TIMEOUT: &str = "http.idle_timeout";
/// Default for [`HTTP_IDLE_TIMEOUT`].
pub const DEFAULT_HTTP_IDLE_TIMEOUT: Duration = Duration::from_secs(15);

/// Whether responses are compressed for clients sending `Accept-Encoding`.
pub const HTTP_COMPRESS: &str = "http.compress";
/// Default for [`HTTP_COMPRESS`].
pub const DEFAULT_HTTP_COMPRESS: bool = true;

/// Deployment environment such as prod, stage, unit-tests, e2e-tests or dev.
pub const ENVIRONMENT: &str = "environment";
/// Default for [`ENVIRONMENT`].
pub const DEFAULT_ENVIRONMENT: &str = "prod";

/// Log level filter.
pub const LOG_LEVEL: &str = "log.level";
/// Default for [`LOG_LEVEL`].
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Whether logs are written as JSON.
pub const LOG_JSON: &str = "log.json";
/// Default for [`LOG_JSON`].
pub const DEFAULT_LOG_JSON: bool = false;

/// How long the server waits for open connections on shutdown.
pub const GRACEFUL_TIMEOUT: &str = "graceful_timeout";
/// Default for [`GRACEFUL_TIMEOUT`].
pub const DEFAULT_GRACEFUL_TIMEOUT: Duration = Duration::from_secs(15);

/// Write timeout for HTTP responses.
pub const HTTP_WRITE_TIMEOUT: &str = "http.write_timeout";
/// Default for [`HTTP_WRITE_TIMEOUT`].
pub const DEFAULT_HTTP_WRITE_TIMEOUT: Duration = Duration::from_secs(15);

/// Read timeout for HTTP requests.
pub const HTTP_READ_TIMEOUT: &str = "http.read_timeout";
/// Default for [`HTTP_READ_TIMEOUT`].
pub const DEFAULT_HTTP_READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Location of the auth client JavaScript library.
pub const AUTH_CLIENT_LIBRARY_URL: &str = "auth_client.library_url";
/// Default for [`AUTH_CLIENT_LIBRARY_URL`].
pub const DEFAULT_AUTH_CLIENT_LIBRARY_URL: &str = "http://129.40.58.177:8082/auth/js/keycloak.js";

/// Raw auth client configuration served to the browser.
pub const AUTH_CLIENT_CONFIG_RAW: &str = "auth_client.config.raw";
/// Default for [`AUTH_CLIENT_CONFIG_RAW`].
pub const DEFAULT_AUTH_CLIENT_CONFIG_RAW: &str = r#"{
  "realm": "local",
  "auth-server-url": "http://129.40.58.177:8082/auth",
  "ssl-required": "none",
  "resource": "crt",
  "clientId": "crt",
  "public-client": true
}"#;

/// Content type of the raw auth client configuration.
pub const AUTH_CLIENT_CONFIG_CONTENT_TYPE: &str = "auth_client.config.content_type";
/// Default for [`AUTH_CLIENT_CONFIG_CONTENT_TYPE`].
pub const DEFAULT_AUTH_CLIENT_CONFIG_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// URL of the identity provider's public signing keys.
pub const AUTH_CLIENT_PUBLIC_KEYS_URL: &str = "auth_client.public_keys_url";
/// Default for [`AUTH_CLIENT_PUBLIC_KEYS_URL`].
pub const DEFAULT_AUTH_CLIENT_PUBLIC_KEYS_URL: &str =
    "http://129.40.58.177:8082/auth/realms/local/protocol/openid-connect/certs";

/// Kubernetes namespace the registration service and host operator run in.
pub const NAMESPACE: &str = "namespace";
/// Default for [`NAMESPACE`].
pub const DEFAULT_NAMESPACE: &str = "toolchain-host-operator";

/// Whether phone verification is enabled.
pub const VERIFICATION_ENABLED: &str = "verification.enabled";
/// Default for [`VERIFICATION_ENABLED`].
pub const DEFAULT_VERIFICATION_ENABLED: bool = false;

/// Verification requests a user may start within 24 hours.
pub const VERIFICATION_DAILY_LIMIT: &str = "verification.daily_limit";
/// Default for [`VERIFICATION_DAILY_LIMIT`].
pub const DEFAULT_VERIFICATION_DAILY_LIMIT: i64 = 5;

/// Attempts allowed to enter a code correctly before a new one is needed.
pub const VERIFICATION_ATTEMPTS_ALLOWED: &str = "verification.attempts_allowed";
/// Default for [`VERIFICATION_ATTEMPTS_ALLOWED`].
pub const DEFAULT_VERIFICATION_ATTEMPTS_ALLOWED: i64 = 3;

/// SMS body template; `%s` is replaced with the verification code.
pub const VERIFICATION_MESSAGE_TEMPLATE: &str = "verification.message_template";
/// Default for [`VERIFICATION_MESSAGE_TEMPLATE`].
pub const DEFAULT_VERIFICATION_MESSAGE_TEMPLATE: &str =
    "Developer Sandbox for Red Hat OpenShift: Your verification code is %s";

/// Comma-separated email domains exempt from phone verification.
pub const VERIFICATION_EXCLUDED_EMAIL_DOMAINS: &str = "verification.excluded_email_domains";

/// Minutes a verification code stays valid.
pub const VERIFICATION_CODE_EXPIRES_IN_MIN: &str = "verification.code_expires_in_min";
/// Default for [`VERIFICATION_CODE_EXPIRES_IN_MIN`].
pub const DEFAULT_VERIFICATION_CODE_EXPIRES_IN_MIN: i64 = 5;

/// Woopra analytics domain.
pub const WOOPRA_DOMAIN: &str = "woopra.domain";

/// Segment analytics write key.
pub const SEGMENT_WRITE_KEY: &str = "segment.write_key";

/// Twilio account identifier. Read from the secret only.
pub const TWILIO_ACCOUNT_SID: &str = "twilio.account.sid";

/// Twilio authentication token. Read from the secret only.
pub const TWILIO_AUTH_TOKEN: &str = "twilio.auth.token";

/// Phone number or alphanumeric sender ID for verification messages. Read from the secret only.
pub const TWILIO_FROM_NUMBER: &str = "twilio.from_number";

/// The value type an option is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Plain string.
    String,
    /// Boolean.
    Bool,
    /// Signed integer.
    Integer,
    /// Duration such as `15s`.
    Duration,
    /// Comma-separated list.
    List,
}

/// A recognized configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    /// Dot-separated key.
    pub key: &'static str,
    /// Default value in its string form.
    pub default: &'static str,
    /// How the value is interpreted.
    pub kind: OptionKind,
}

const fn option(key: &'static str, default: &'static str, kind: OptionKind) -> ConfigOption {
    ConfigOption { key, default, kind }
}

/// Every option that has a registered default, in declaration order.
pub const OPTIONS: &[ConfigOption] = &[
    option(HTTP_ADDRESS, DEFAULT_HTTP_ADDRESS, OptionKind::String),
    option(HTTP_IDLE_TIMEOUT, "15s", OptionKind::Duration),
    option(HTTP_COMPRESS, "true", OptionKind::Bool),
    option(ENVIRONMENT, DEFAULT_ENVIRONMENT, OptionKind::String),
    option(LOG_LEVEL, DEFAULT_LOG_LEVEL, OptionKind::String),
    option(LOG_JSON, "false", OptionKind::Bool),
    option(GRACEFUL_TIMEOUT, "15s", OptionKind::Duration),
    option(HTTP_WRITE_TIMEOUT, "15s", OptionKind::Duration),
    option(HTTP_READ_TIMEOUT, "15s", OptionKind::Duration),
    option(
        AUTH_CLIENT_LIBRARY_URL,
        DEFAULT_AUTH_CLIENT_LIBRARY_URL,
        OptionKind::String,
    ),
    option(
        AUTH_CLIENT_CONFIG_RAW,
        DEFAULT_AUTH_CLIENT_CONFIG_RAW,
        OptionKind::String,
    ),
    option(
        AUTH_CLIENT_CONFIG_CONTENT_TYPE,
        DEFAULT_AUTH_CLIENT_CONFIG_CONTENT_TYPE,
        OptionKind::String,
    ),
    option(
        AUTH_CLIENT_PUBLIC_KEYS_URL,
        DEFAULT_AUTH_CLIENT_PUBLIC_KEYS_URL,
        OptionKind::String,
    ),
    option(NAMESPACE, DEFAULT_NAMESPACE, OptionKind::String),
    option(VERIFICATION_ENABLED, "false", OptionKind::Bool),
    option(VERIFICATION_DAILY_LIMIT, "5", OptionKind::Integer),
    option(VERIFICATION_ATTEMPTS_ALLOWED, "3", OptionKind::Integer),
    option(
        VERIFICATION_MESSAGE_TEMPLATE,
        DEFAULT_VERIFICATION_MESSAGE_TEMPLATE,
        OptionKind::String,
    ),
    option(VERIFICATION_EXCLUDED_EMAIL_DOMAINS, "", OptionKind::List),
    option(VERIFICATION_CODE_EXPIRES_IN_MIN, "5", OptionKind::Integer),
    option(WOOPRA_DOMAIN, "", OptionKind::String),
    option(SEGMENT_WRITE_KEY, "", OptionKind::String),
];

/// Keys that are only ever read from the secret.
pub const SECRET_KEYS: &[&str] = &[TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, TWILIO_FROM_NUMBER];

/// Looks up a recognized option by key.
pub fn find(key: &str) -> Option<&'static ConfigOption> {
    OPTIONS.iter().find(|option| option.key == key)
}
