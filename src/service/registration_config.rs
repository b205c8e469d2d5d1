// SPDX-License-Identifier: MIT OR Apache-2.0

//! The registration service configuration facade.
//!
//! `RegistrationConfig` stacks its sources by priority and answers every
//! accessor from the highest-priority source that has a value:
//!
//! | Priority | Source |
//! |---|---|
//! | 3 | YAML configuration file (optional) |
//! | 2 | `REGISTRATION_*` environment variables, read live |
//! | 1 | config map |
//! | 0 | registered defaults |
//!
//! Secret values are loaded once and kept outside that stack.

use crate::adapters::{EnvVarAdapter, MapSource, YamlFileAdapter};
use crate::domain::options::{self, ENV_PREFIX, SECRET_KEYS};
use crate::domain::{
    BuildInfo, ConfigError, ConfigKey, ConfigValue, Configuration, Result, SecretValues,
};
use crate::ports::{ConfigMapLoader, ConfigSource, SecretLoader};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Layered configuration of the registration service.
///
/// Construct it once at startup with [`RegistrationConfig::new`] or
/// [`RegistrationConfig::builder`]; afterwards it is read-only and can be
/// shared between threads.
///
/// # Examples
///
/// ```rust
/// use registration_config::prelude::*;
///
/// # fn main() -> Result<()> {
/// let secret = InMemoryLoader::from_pairs([("twilio.account.sid", "AC123")]);
/// let config_map = InMemoryLoader::from_pairs([("verification.enabled", "true")]);
///
/// let config = RegistrationConfig::builder()
///     .with_secret_loader(&secret)
///     .with_config_map_loader(&config_map)
///     .with_env_prefix("DOCTEST_REGISTRATION_CONFIG")
///     .build()?;
///
/// assert!(config.verification_enabled());
/// assert_eq!(config.twilio_account_sid(), "AC123");
/// assert_eq!(config.verification_daily_limit(), 5);
/// # Ok(())
/// # }
/// ```
pub struct RegistrationConfig {
    /// Sources in priority order (highest first)
    sources: Vec<Box<dyn ConfigSource>>,
    /// Values of the secret, never merged into `sources`
    secrets: SecretValues,
    /// Derived from `verification.excluded_email_domains` at construction
    excluded_domains: Vec<String>,
    /// Canonical path of the configuration file, if one was read
    config_file: Option<PathBuf>,
    build_info: BuildInfo,
}

impl RegistrationConfig {
    /// Loads the configuration.
    ///
    /// Invokes `secret_loader` and `config_map_loader`, registers the defaults,
    /// binds `REGISTRATION_*` environment variables and, when `config_file` is
    /// given, reads it as YAML.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::SecretLoadError`] if the secret cannot be loaded
    /// - [`ConfigError::ConfigMapLoadError`] if the config map cannot be loaded
    /// - [`ConfigError::FileParseError`] if the file cannot be read or parsed
    pub fn new(
        config_file: Option<&Path>,
        secret_loader: &dyn SecretLoader,
        config_map_loader: &dyn ConfigMapLoader,
    ) -> Result<Self> {
        let mut builder = Self::builder()
            .with_secret_loader(secret_loader)
            .with_config_map_loader(config_map_loader);
        if let Some(path) = config_file {
            builder = builder.with_config_file(path);
        }
        builder.build()
    }

    /// Creates a new configuration builder.
    pub fn builder<'a>() -> RegistrationConfigBuilder<'a> {
        RegistrationConfigBuilder::new()
    }

    /// Adds a configuration source; sources are kept sorted by priority.
    fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
        self.sources.sort_by_key(|b| std::cmp::Reverse(b.priority()));
    }

    /// Queries all sources for a configuration value, respecting priority order.
    fn query_sources(&self, key: &ConfigKey) -> Option<ConfigValue> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }

    /// Returns the resolved value for `key`, if any source has one.
    pub fn value(&self, key: &str) -> Option<ConfigValue> {
        self.query_sources(&ConfigKey::from(key))
    }

    /// Returns the resolved value for `key`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConfigKeyNotFound`] if no source has a value.
    pub fn get(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.query_sources(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.as_str().to_string(),
            })
    }

    /// Returns every resolved key/value pair, sorted by key.
    ///
    /// Includes all keys known to the defaults, the config map and the file,
    /// plus recognized keys set in the environment. Secret-only keys are left
    /// out even if another source carries them.
    pub fn resolved_values(&self) -> BTreeMap<String, String> {
        let mut keys = BTreeSet::new();
        for source in &self.sources {
            match source.all_keys() {
                Ok(source_keys) => keys.extend(source_keys),
                Err(e) => tracing::debug!("Error listing keys of '{}': {}", source.name(), e),
            }
        }

        keys.into_iter()
            .filter(|key| !SECRET_KEYS.contains(&key.as_str()))
            .filter_map(|key| {
                let value = self.query_sources(&key)?;
                Some((key.into_string(), value.into()))
            })
            .collect()
    }

    /// Names of the keys present in the secret. Values are not exposed here.
    pub fn secret_keys(&self) -> Vec<&str> {
        self.secrets.keys()
    }

    /// Names of the active sources, highest priority first.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Canonical path of the configuration file, if one was read.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Build metadata injected at construction.
    pub fn build_info(&self) -> &BuildInfo {
        &self.build_info
    }

    fn string_value(&self, key: &str) -> String {
        self.value(key).map(String::from).unwrap_or_default()
    }

    fn typed_value<T>(
        &self,
        key: &str,
        fallback: T,
        convert: impl FnOnce(&ConfigValue) -> Result<T>,
    ) -> T {
        match self.value(key) {
            Some(value) => convert(&value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid value for '{}', using default: {}", key, e);
                fallback
            }),
            None => fallback,
        }
    }

    fn bool_value(&self, key: &str, fallback: bool) -> bool {
        self.typed_value(key, fallback, |v| v.as_bool(key))
    }

    fn int_value(&self, key: &str, fallback: i64) -> i64 {
        self.typed_value(key, fallback, |v| v.as_i64(key))
    }

    fn duration_value(&self, key: &str, fallback: Duration) -> Duration {
        self.typed_value(key, fallback, |v| v.as_duration(key))
    }
}

impl std::fmt::Debug for RegistrationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationConfig")
            .field("sources", &self.source_names())
            .field("secrets", &self.secrets)
            .field("excluded_domains", &self.excluded_domains)
            .field("config_file", &self.config_file)
            .field("build_info", &self.build_info)
            .finish()
    }
}

impl Configuration for RegistrationConfig {
    fn print_config(&self) {
        let variables = self.resolved_values();
        tracing::info!(
            target: "configuration",
            commit = %self.build_info.commit(),
            build_time = %self.build_info.build_time(),
            start_time = %self.build_info.start_time(),
            variables = ?variables,
            "Registration service configuration variables:"
        );
    }

    fn http_address(&self) -> String {
        self.string_value(options::HTTP_ADDRESS)
    }

    fn http_compress_responses(&self) -> bool {
        self.bool_value(options::HTTP_COMPRESS, options::DEFAULT_HTTP_COMPRESS)
    }

    fn http_write_timeout(&self) -> Duration {
        self.duration_value(
            options::HTTP_WRITE_TIMEOUT,
            options::DEFAULT_HTTP_WRITE_TIMEOUT,
        )
    }

    fn http_read_timeout(&self) -> Duration {
        self.duration_value(
            options::HTTP_READ_TIMEOUT,
            options::DEFAULT_HTTP_READ_TIMEOUT,
        )
    }

    fn http_idle_timeout(&self) -> Duration {
        self.duration_value(
            options::HTTP_IDLE_TIMEOUT,
            options::DEFAULT_HTTP_IDLE_TIMEOUT,
        )
    }

    fn environment(&self) -> String {
        self.string_value(options::ENVIRONMENT)
    }

    fn log_level(&self) -> String {
        self.string_value(options::LOG_LEVEL)
    }

    fn is_log_json(&self) -> bool {
        self.bool_value(options::LOG_JSON, options::DEFAULT_LOG_JSON)
    }

    fn graceful_timeout(&self) -> Duration {
        self.duration_value(options::GRACEFUL_TIMEOUT, options::DEFAULT_GRACEFUL_TIMEOUT)
    }

    fn auth_client_library_url(&self) -> String {
        self.string_value(options::AUTH_CLIENT_LIBRARY_URL)
    }

    fn auth_client_config_content_type(&self) -> String {
        self.string_value(options::AUTH_CLIENT_CONFIG_CONTENT_TYPE)
    }

    fn auth_client_config_raw(&self) -> String {
        self.string_value(options::AUTH_CLIENT_CONFIG_RAW)
    }

    fn twilio_account_sid(&self) -> String {
        self.secrets.get(options::TWILIO_ACCOUNT_SID).to_string()
    }

    fn twilio_auth_token(&self) -> String {
        self.secrets.get(options::TWILIO_AUTH_TOKEN).to_string()
    }

    fn auth_client_public_keys_url(&self) -> String {
        self.string_value(options::AUTH_CLIENT_PUBLIC_KEYS_URL)
    }

    fn namespace(&self) -> String {
        self.string_value(options::NAMESPACE)
    }

    fn verification_enabled(&self) -> bool {
        self.bool_value(
            options::VERIFICATION_ENABLED,
            options::DEFAULT_VERIFICATION_ENABLED,
        )
    }

    fn verification_daily_limit(&self) -> i64 {
        self.int_value(
            options::VERIFICATION_DAILY_LIMIT,
            options::DEFAULT_VERIFICATION_DAILY_LIMIT,
        )
    }

    fn verification_attempts_allowed(&self) -> i64 {
        self.int_value(
            options::VERIFICATION_ATTEMPTS_ALLOWED,
            options::DEFAULT_VERIFICATION_ATTEMPTS_ALLOWED,
        )
    }

    fn verification_message_template(&self) -> String {
        self.string_value(options::VERIFICATION_MESSAGE_TEMPLATE)
    }

    fn verification_excluded_email_domains(&self) -> Vec<String> {
        self.excluded_domains.clone()
    }

    fn twilio_from_number(&self) -> String {
        self.secrets.get(options::TWILIO_FROM_NUMBER).to_string()
    }

    fn verification_code_expires_in_min(&self) -> i64 {
        self.int_value(
            options::VERIFICATION_CODE_EXPIRES_IN_MIN,
            options::DEFAULT_VERIFICATION_CODE_EXPIRES_IN_MIN,
        )
    }

    fn woopra_domain(&self) -> String {
        self.string_value(options::WOOPRA_DOMAIN)
    }

    fn segment_write_key(&self) -> String {
        self.string_value(options::SEGMENT_WRITE_KEY)
    }
}

/// Builder for constructing a [`RegistrationConfig`].
///
/// Loaders that are not supplied behave as empty resources.
///
/// # Examples
///
/// ```rust,no_run
/// use registration_config::adapters::MountedDirLoader;
/// use registration_config::service::RegistrationConfigBuilder;
///
/// # fn main() -> registration_config::domain::Result<()> {
/// let secret = MountedDirLoader::new("/etc/registration-service/secret");
/// let config = RegistrationConfigBuilder::new()
///     .with_secret_loader(&secret)
///     .with_config_file("/etc/registration-service/config.yaml")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RegistrationConfigBuilder<'a> {
    config_file: Option<PathBuf>,
    secret_loader: Option<&'a dyn SecretLoader>,
    config_map_loader: Option<&'a dyn ConfigMapLoader>,
    env_prefix: String,
    build_info: Option<BuildInfo>,
}

impl<'a> RegistrationConfigBuilder<'a> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_file: None,
            secret_loader: None,
            config_map_loader: None,
            env_prefix: ENV_PREFIX.to_string(),
            build_info: None,
        }
    }

    /// Reads the YAML file at `path` on top of all other sources.
    ///
    /// An empty path means no file.
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.config_file = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.to_path_buf())
        };
        self
    }

    /// Sets the loader of the secret.
    pub fn with_secret_loader(mut self, loader: &'a dyn SecretLoader) -> Self {
        self.secret_loader = Some(loader);
        self
    }

    /// Sets the loader of the config map.
    pub fn with_config_map_loader(mut self, loader: &'a dyn ConfigMapLoader) -> Self {
        self.config_map_loader = Some(loader);
        self
    }

    /// Overrides the environment variable prefix (default `REGISTRATION`).
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Injects build metadata; defaults to [`BuildInfo::from_build_env`].
    pub fn with_build_info(mut self, build_info: BuildInfo) -> Self {
        self.build_info = Some(build_info);
        self
    }

    /// Loads every source and builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`RegistrationConfig::new`].
    pub fn build(self) -> Result<RegistrationConfig> {
        let secret_values = match self.secret_loader {
            Some(loader) => loader.load_secret().map_err(ConfigError::secret_load)?,
            None => HashMap::new(),
        };
        let config_map = match self.config_map_loader {
            Some(loader) => loader
                .load_config_map()
                .map_err(ConfigError::config_map_load)?,
            None => HashMap::new(),
        };
        tracing::debug!(
            "Loaded {} secret keys and {} config map keys",
            secret_values.len(),
            config_map.len()
        );

        let file = match &self.config_file {
            Some(path) => Some(
                YamlFileAdapter::from_file(path).map_err(|e| ConfigError::file_parse(path, e))?,
            ),
            None => None,
        };

        let mut config = RegistrationConfig {
            sources: Vec::new(),
            secrets: SecretValues::new(secret_values),
            excluded_domains: Vec::new(),
            config_file: None,
            build_info: self.build_info.unwrap_or_default(),
        };

        let config_map = MapSource::config_map(config_map);
        let mut env = EnvVarAdapter::with_prefix(self.env_prefix);
        env = env.bind_keys(config_map.all_keys()?);
        if let Some(file) = &file {
            env = env.bind_keys(file.all_keys()?);
        }

        config.add_source(Box::new(MapSource::defaults()));
        config.add_source(Box::new(config_map));
        config.add_source(Box::new(env));
        config.excluded_domains = excluded_domains(&config);

        if let Some(file) = file {
            config.config_file = Some(file.file_path().to_path_buf());
            config.add_source(Box::new(file));
            let domains = excluded_domains(&config);
            if !domains.is_empty() {
                config.excluded_domains = domains;
            }
        }

        tracing::debug!(
            "Configuration sources (highest priority first): {:?}",
            config.source_names()
        );
        Ok(config)
    }
}

impl Default for RegistrationConfigBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn excluded_domains(config: &RegistrationConfig) -> Vec<String> {
    config
        .value(options::VERIFICATION_EXCLUDED_EMAIL_DOMAINS)
        .map(|v| v.as_list())
        .unwrap_or_default()
}
