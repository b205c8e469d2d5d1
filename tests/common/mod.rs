// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use registration_config::domain::{ConfigError, Result};
use registration_config::ports::{ConfigMapLoader, SecretLoader};
use std::collections::HashMap;
use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Sets environment variables and removes them again on drop.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

/// Creates a temporary YAML file with the given content.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// A loader whose resource cannot be read.
#[allow(dead_code)]
pub struct FailingLoader {
    pub message: &'static str,
}

impl SecretLoader for FailingLoader {
    fn load_secret(&self) -> Result<HashMap<String, String>> {
        Err(ConfigError::SourceError {
            source_name: "secret".to_string(),
            message: self.message.to_string(),
            source: None,
        })
    }
}

impl ConfigMapLoader for FailingLoader {
    fn load_config_map(&self) -> Result<HashMap<String, String>> {
        Err(ConfigError::SourceError {
            source_name: "config-map".to_string(),
            message: self.message.to_string(),
            source: None,
        })
    }
}

/// In-memory sink for log output.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Runs `f` with a subscriber writing into this buffer.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
