// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader for Kubernetes secrets and config maps mounted as volumes.
//!
//! A mounted secret or config map is a directory with one file per key. The
//! kubelet also creates hidden `..data` and `..<timestamp>` entries, which are
//! skipped.

use crate::domain::{ConfigError, ConfigKey, Result};
use crate::ports::{ConfigMapLoader, SecretLoader};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default mount point of the registration service secret.
pub const DEFAULT_SECRET_DIR: &str = "/etc/registration-service/secret";

/// Default mount point of the registration service config map.
pub const DEFAULT_CONFIG_MAP_DIR: &str = "/etc/registration-service/config";

/// Kubernetes caps secrets and config maps at 1MiB.
const MAX_VALUE_SIZE: u64 = 1024 * 1024;

/// Reads key/value pairs from a mounted volume directory.
///
/// A directory that does not exist is treated as an unprovisioned resource and
/// yields no values. Any other I/O failure is an error.
///
/// Secret keys are used verbatim. Config map keys are normalized like any
/// other configuration key.
///
/// # Examples
///
/// ```rust,no_run
/// use registration_config::adapters::MountedDirLoader;
/// use registration_config::ports::SecretLoader;
///
/// let loader = MountedDirLoader::new("/etc/registration-service/secret");
/// let secret = loader.load_secret().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MountedDirLoader {
    dir: PathBuf,
}

impl MountedDirLoader {
    /// Creates a loader for the volume mounted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this loader reads.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_dir(&self) -> Result<HashMap<String, String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "Mount {} not found, continuing without it",
                    self.dir.display()
                );
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(ConfigError::SourceError {
                    source_name: self.dir.display().to_string(),
                    message: "Failed to list mounted directory".to_string(),
                    source: Some(Box::new(e)),
                })
            }
        };

        let mut values = HashMap::new();
        for entry in entries {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    tracing::debug!("Skipping non-unicode entry {:?}", name);
                    continue;
                }
            };
            if name.starts_with('.') {
                continue;
            }

            // Follows the kubelet's symlinks into ..data
            let path = entry.path();
            let metadata = fs::metadata(&path)?;
            if !metadata.is_file() {
                continue;
            }
            if metadata.len() > MAX_VALUE_SIZE {
                return Err(ConfigError::SourceError {
                    source_name: self.dir.display().to_string(),
                    message: format!(
                        "Value of '{}' too large: {} bytes (max {} bytes)",
                        name,
                        metadata.len(),
                        MAX_VALUE_SIZE
                    ),
                    source: None,
                });
            }

            let content = fs::read_to_string(&path).map_err(|e| ConfigError::SourceError {
                source_name: self.dir.display().to_string(),
                message: format!("Failed to read value of '{}'", name),
                source: Some(Box::new(e)),
            })?;
            let value = content
                .strip_suffix("\r\n")
                .or_else(|| content.strip_suffix('\n'))
                .unwrap_or(content.as_str())
                .to_string();
            values.insert(name, value);
        }

        tracing::debug!(
            "Loaded {} keys from mounted directory {}",
            values.len(),
            self.dir.display()
        );
        Ok(values)
    }
}

impl SecretLoader for MountedDirLoader {
    fn load_secret(&self) -> Result<HashMap<String, String>> {
        self.read_dir().map_err(ConfigError::secret_load)
    }
}

impl ConfigMapLoader for MountedDirLoader {
    fn load_config_map(&self) -> Result<HashMap<String, String>> {
        let values = self.read_dir().map_err(ConfigError::config_map_load)?;
        Ok(values
            .into_iter()
            .map(|(k, v)| (ConfigKey::from(k).into_string(), v))
            .collect())
    }
}
