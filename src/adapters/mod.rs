// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source and loader implementations.
//!
//! Each adapter implements one of the ports: `ConfigSource` for the layers of
//! the precedence merge, `SecretLoader`/`ConfigMapLoader` for the external
//! resources read once at construction.

pub mod env_var;
pub mod in_memory;
pub mod map_source;
pub mod mounted;
pub mod yaml_file;

// Re-export adapters
pub use env_var::EnvVarAdapter;
pub use in_memory::InMemoryLoader;
pub use map_source::MapSource;
pub use mounted::{MountedDirLoader, DEFAULT_CONFIG_MAP_DIR, DEFAULT_SECRET_DIR};
pub use yaml_file::{YamlFileAdapter, YamlParser};
