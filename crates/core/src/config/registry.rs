// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry configuration
//!
//! Controls how an emission reacts to failing callbacks. Loaded from TOML:
//!
//! ```toml
//! delivery = "collect"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What `emit` does when a callback returns an error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Stop at the first failure and return it; later callbacks are skipped
    #[default]
    FailFast,
    /// Deliver to every callback, then report all failures together
    Collect,
}

/// Configuration for a [`Registry`](crate::Registry)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub delivery: DeliveryPolicy,
}

impl RegistryConfig {
    pub fn new(delivery: DeliveryPolicy) -> Self {
        Self { delivery }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
