// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration facade.
//!
//! [`RegistrationConfig`] wires the adapters together and implements the
//! [`Configuration`](crate::domain::Configuration) trait on top of them.

pub mod registration_config;

pub use registration_config::{RegistrationConfig, RegistrationConfigBuilder};
