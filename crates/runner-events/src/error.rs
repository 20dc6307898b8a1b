// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the runner event plugin convention.

use thiserror::Error;

/// The primary error type used across the emitter trait and registry.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration errors (invalid manifest TOML, missing required fields,
    /// malformed settings values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Event delivery errors (request construction, transport failure).
    #[error("emitter error: {message}")]
    Emitter {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {group}/{key}")]
    PluginNotFound { group: String, key: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
