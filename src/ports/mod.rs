// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the configuration facade and the
//! outside world: value sources, file parsers, and the loaders for the
//! secret and the config map.

pub mod loader;
pub mod parser;
pub mod source;

// Re-export commonly used types
pub use loader::{ConfigMapLoader, SecretLoader};
pub use parser::ConfigParser;
pub use source::ConfigSource;
