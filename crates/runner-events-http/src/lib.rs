// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP event emitter plugin for the runner event pipeline.
//!
//! Registered under the `runner.plugins` group with key `http`. Forwards
//! every runner event and status transition as a JSON POST, either to a
//! plain HTTP URL or over a Unix domain socket when the configured url
//! names an existing filesystem path. Without a configured url the
//! emitter stays registered but skips every delivery.

pub mod config;
mod transport;

use async_trait::async_trait;
use tracing::{debug, info};

use runner_events::{
    parse_plugin_manifest, EmitterFactory, EmitterRegistry, EventEmitter, PluginManifest,
    RunnerError, RunnerEvent, StatusEvent,
};

pub use config::HttpEmitterConfig;

use crate::transport::Transport;

/// The bundled `plugin.toml`, embedded so the declared metadata cannot
/// drift from the installed package.
const PLUGIN_TOML: &str = include_str!("../plugin.toml");

/// Returns this plugin's manifest, parsed from the bundled `plugin.toml`.
pub fn manifest() -> Result<PluginManifest, RunnerError> {
    parse_plugin_manifest(PLUGIN_TOML)
}

/// Registers the HTTP emitter in the given registry under its entry point.
pub fn register(registry: &mut EmitterRegistry) -> Result<(), RunnerError> {
    registry.register(manifest()?, Box::new(HttpEmitterFactory));
    Ok(())
}

/// Factory creating [`HttpEmitter`] instances from the runner's settings.
pub struct HttpEmitterFactory;

impl EmitterFactory for HttpEmitterFactory {
    fn create(&self, settings: &serde_json::Value) -> Result<Box<dyn EventEmitter>, RunnerError> {
        Ok(Box::new(HttpEmitter::from_settings(settings)?))
    }
}

/// Event emitter delivering payloads as JSON POSTs.
#[derive(Debug)]
pub struct HttpEmitter {
    config: HttpEmitterConfig,
    transport: Transport,
}

impl HttpEmitter {
    /// Creates an emitter from the runner settings table, applying the
    /// `RUNNER_HTTP_URL` / `RUNNER_HTTP_PATH` environment overrides.
    pub fn from_settings(settings: &serde_json::Value) -> Result<Self, RunnerError> {
        Self::from_config(config::resolve_config(settings)?)
    }

    /// Creates an emitter from an already-resolved configuration.
    pub fn from_config(config: HttpEmitterConfig) -> Result<Self, RunnerError> {
        Ok(Self {
            config,
            transport: Transport::new()?,
        })
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &HttpEmitterConfig {
        &self.config
    }

    async fn deliver(&self, payload: &serde_json::Value) -> Result<(), RunnerError> {
        let Some(url) = self.config.url.as_deref() else {
            info!("http emitter skipped: no url configured");
            return Ok(());
        };

        let status = self
            .transport
            .post_json(url, self.config.path.as_deref(), &self.config.headers, payload)
            .await?;
        debug!(status, "payload delivered");
        Ok(())
    }
}

#[async_trait]
impl EventEmitter for HttpEmitter {
    fn name(&self) -> &str {
        "http"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(1, 0, 0)
    }

    async fn emit_event(&self, event: &RunnerEvent) -> Result<(), RunnerError> {
        let payload = serde_json::to_value(event).map_err(|e| RunnerError::Emitter {
            message: format!("failed to serialize event: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.deliver(&payload).await
    }

    async fn emit_status(&self, status: &StatusEvent) -> Result<(), RunnerError> {
        let payload = serde_json::to_value(status).map_err(|e| RunnerError::Emitter {
            message: format!("failed to serialize status: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.deliver(&payload).await
    }

    async fn shutdown(&self) -> Result<(), RunnerError> {
        Ok(())
    }
}
