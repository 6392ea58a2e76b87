// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for emission and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a failing callback
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A callback that failed during an emission
#[derive(Debug, Error)]
#[error("callback #{position} failed: {source}")]
pub struct CallbackFailure {
    /// Zero-based index of the callback in the emission snapshot
    pub position: usize,
    #[source]
    pub source: CallbackError,
}

/// Errors surfaced to the caller of `emit`
#[derive(Debug, Error)]
pub enum EmitError {
    /// Fail-fast delivery stopped at the first failing callback
    #[error("delivery of {category} aborted: {failure}")]
    CallbackFailed {
        category: String,
        #[source]
        failure: CallbackFailure,
    },
    /// Collect delivery reached every callback; these ones failed
    #[error("{} of {delivered} callbacks failed for {category}", .failures.len())]
    Aggregate {
        category: String,
        delivered: usize,
        failures: Vec<CallbackFailure>,
    },
}

impl EmitError {
    /// Every callback failure carried by this error, in delivery order
    pub fn failures(&self) -> &[CallbackFailure] {
        match self {
            EmitError::CallbackFailed { failure, .. } => std::slice::from_ref(failure),
            EmitError::Aggregate { failures, .. } => failures,
        }
    }

    /// Display rendering of the category the emission targeted
    pub fn category(&self) -> &str {
        match self {
            EmitError::CallbackFailed { category, .. } | EmitError::Aggregate { category, .. } => {
                category
            }
        }
    }
}

/// Errors loading a registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
