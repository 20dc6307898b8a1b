// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emitter configuration resolved from the host runner's settings.
//!
//! Layered with Figment, later overrides earlier:
//! 1. Compiled defaults (everything unset)
//! 2. The runner settings table (`runner_http_url`, `runner_http_path`,
//!    `runner_http_headers`)
//! 3. `RUNNER_HTTP_URL` / `RUNNER_HTTP_PATH` environment variables
//!
//! Headers are settings-only; there is no environment override for them.

use std::collections::HashMap;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use runner_events::RunnerError;

/// Resolved HTTP emitter configuration.
///
/// A `None` url disables the emitter: deliveries are skipped with an
/// info-level log line instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpEmitterConfig {
    /// Destination: either an `http(s)://` URL or the filesystem path of a
    /// Unix domain socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request path appended when posting over a Unix domain socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Extra headers attached to every delivery.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

/// The emitter's keys as they appear in the runner settings table.
///
/// Unrelated settings keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct SettingsKeys {
    #[serde(default)]
    runner_http_url: Option<String>,
    #[serde(default)]
    runner_http_path: Option<String>,
    #[serde(default)]
    runner_http_headers: Option<HashMap<String, String>>,
}

/// Resolve the emitter configuration from the runner settings table with
/// environment variable overrides.
pub fn resolve_config(settings: &serde_json::Value) -> Result<HttpEmitterConfig, RunnerError> {
    let keys: SettingsKeys = serde_json::from_value(settings.clone())
        .map_err(|e| RunnerError::Config(format!("invalid runner settings: {e}")))?;

    let from_settings = HttpEmitterConfig {
        url: keys.runner_http_url,
        path: keys.runner_http_path,
        headers: keys.runner_http_headers.unwrap_or_default(),
    };

    build_figment(from_settings)
        .extract()
        .map_err(|e| RunnerError::Config(format!("invalid http emitter configuration: {e}")))
}

/// Build the Figment used for config resolution (exposed for tests).
fn build_figment(from_settings: HttpEmitterConfig) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HttpEmitterConfig::default()))
        .merge(Serialized::defaults(from_settings))
        .merge(Env::prefixed("RUNNER_HTTP_").only(&["url", "path"]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_resolve_to_disabled() {
        let config = resolve_config(&serde_json::json!({})).unwrap();
        assert!(config.url.is_none());
        assert!(config.path.is_none());
        assert!(config.headers.is_empty());
    }

    #[test]
    fn settings_keys_are_mapped() {
        let settings = serde_json::json!({
            "runner_http_url": "http://127.0.0.1:8088/events",
            "runner_http_path": "/events",
            "runner_http_headers": {"authorization": "Bearer abc"},
            "idle_timeout": 600
        });
        let config = resolve_config(&settings).unwrap();
        assert_eq!(config.url.as_deref(), Some("http://127.0.0.1:8088/events"));
        assert_eq!(config.path.as_deref(), Some("/events"));
        assert_eq!(config.headers["authorization"], "Bearer abc");
    }

    #[test]
    fn env_overrides_settings_url() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RUNNER_HTTP_URL", "http://from-env:9000");

            let settings = serde_json::json!({
                "runner_http_url": "http://from-settings:8000",
                "runner_http_headers": {"x-run": "42"}
            });
            let config = resolve_config(&settings).expect("config should resolve");
            assert_eq!(config.url.as_deref(), Some("http://from-env:9000"));
            // Headers have no env override and survive the merge.
            assert_eq!(config.headers["x-run"], "42");
            Ok(())
        });
    }

    #[test]
    fn env_sets_url_when_settings_silent() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RUNNER_HTTP_URL", "/run/events.sock");
            jail.set_env("RUNNER_HTTP_PATH", "/events");

            let config = resolve_config(&serde_json::json!({})).expect("config should resolve");
            assert_eq!(config.url.as_deref(), Some("/run/events.sock"));
            assert_eq!(config.path.as_deref(), Some("/events"));
            Ok(())
        });
    }

    #[test]
    fn header_env_vars_are_not_consumed() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RUNNER_HTTP_HEADERS", "not-a-map");

            let config = resolve_config(&serde_json::json!({})).expect("config should resolve");
            assert!(config.headers.is_empty());
            Ok(())
        });
    }

    #[test]
    fn non_object_settings_rejected() {
        let err = resolve_config(&serde_json::json!("not a table"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid runner settings"));
    }
}
