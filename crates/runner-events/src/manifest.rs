// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! An emitter plugin ships a `plugin.toml` alongside its package. The
//! manifest declares the plugin's identity and exactly one entry point:
//! the `(group, key, locator)` triple the host uses to discover and load
//! the implementation after installation.

use serde::{Deserialize, Serialize};

use crate::error::RunnerError;

/// The entry-point declaration of a plugin manifest.
///
/// `group` is the plugin-group namespace owned by the host runner,
/// `key` is the short identifier the runner references the plugin by,
/// and `locator` names the package providing the implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub group: String,
    pub key: String,
    pub locator: String,
}

/// Parsed plugin manifest describing an emitter plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique name of the plugin package.
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable one-line description.
    pub description: String,
    /// Optional author identifier.
    pub author: Option<String>,
    /// The single entry point this plugin registers.
    pub entry_point: EntryPoint,
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
struct PluginManifestFile {
    plugin: PluginSection,
    entry_point: EntryPoint,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
struct PluginSection {
    name: String,
    version: String,
    description: String,
    author: Option<String>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that name, version, entry-point key, and entry-point locator
/// are all non-empty. The TOML model admits exactly one `[entry_point]`
/// table, so a manifest cannot declare more than one entry point.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, RunnerError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| RunnerError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    if section.name.is_empty() {
        return Err(RunnerError::Config(
            "plugin manifest: name must not be empty".to_string(),
        ));
    }

    if section.version.is_empty() {
        return Err(RunnerError::Config(
            "plugin manifest: version must not be empty".to_string(),
        ));
    }

    if file.entry_point.key.is_empty() {
        return Err(RunnerError::Config(
            "plugin manifest: entry_point.key must not be empty".to_string(),
        ));
    }

    if file.entry_point.locator.is_empty() {
        return Err(RunnerError::Config(
            "plugin manifest: entry_point.locator must not be empty".to_string(),
        ));
    }

    Ok(PluginManifest {
        name: section.name,
        version: section.version,
        description: section.description,
        author: section.author,
        entry_point: file.entry_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[plugin]
name = "runner-events-http"
version = "1.0.0"
description = "HTTP event emitter plugin for the runner event pipeline"
author = "Runner Events Contributors"

[entry_point]
group = "runner.plugins"
key = "http"
locator = "runner_events_http"
"#;
        let manifest = parse_plugin_manifest(toml).unwrap();
        assert_eq!(manifest.name, "runner-events-http");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.author.as_deref(), Some("Runner Events Contributors"));
        assert_eq!(manifest.entry_point.group, "runner.plugins");
        assert_eq!(manifest.entry_point.key, "http");
        assert_eq!(manifest.entry_point.locator, "runner_events_http");
    }

    #[test]
    fn parse_is_deterministic() {
        let toml = r#"
[plugin]
name = "runner-events-http"
version = "1.0.0"
description = "HTTP event emitter plugin"

[entry_point]
group = "runner.plugins"
key = "http"
locator = "runner_events_http"
"#;
        let first = parse_plugin_manifest(toml).unwrap();
        let second = parse_plugin_manifest(toml).unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn parse_missing_name() {
        let toml = r#"
[plugin]
name = ""
version = "1.0.0"
description = "empty name"

[entry_point]
group = "runner.plugins"
key = "http"
locator = "x"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("name must not be empty"));
    }

    #[test]
    fn parse_missing_version() {
        let toml = r#"
[plugin]
name = "test"
version = ""
description = "empty version"

[entry_point]
group = "runner.plugins"
key = "http"
locator = "x"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("version must not be empty"));
    }

    #[test]
    fn parse_empty_entry_point_key() {
        let toml = r#"
[plugin]
name = "test"
version = "1.0.0"
description = "empty key"

[entry_point]
group = "runner.plugins"
key = ""
locator = "x"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("entry_point.key must not be empty"));
    }

    #[test]
    fn parse_empty_entry_point_locator() {
        let toml = r#"
[plugin]
name = "test"
version = "1.0.0"
description = "empty locator"

[entry_point]
group = "runner.plugins"
key = "http"
locator = ""
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("entry_point.locator must not be empty"));
    }

    #[test]
    fn parse_rejects_missing_entry_point_table() {
        let toml = r#"
[plugin]
name = "test"
version = "1.0.0"
description = "no entry point"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("invalid plugin manifest"));
    }
}
