// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry resolving entry points to emitter factories.
//!
//! The `EmitterRegistry` stores `EmitterEntry` records keyed by the
//! `(group, key)` pair of each plugin's entry point. The host runner
//! looks up the key it was configured with and creates an emitter from
//! the matching factory.

use std::collections::HashMap;

use crate::emitter::EventEmitter;
use crate::error::RunnerError;
use crate::manifest::PluginManifest;

/// Factory trait for creating emitter instances from the host's settings.
///
/// The settings value is the runner's full settings table; factories read
/// the keys they recognize and ignore the rest.
pub trait EmitterFactory: Send + Sync {
    /// Create a new emitter instance from the given settings.
    fn create(&self, settings: &serde_json::Value) -> Result<Box<dyn EventEmitter>, RunnerError>;
}

/// A single entry in the emitter registry.
pub struct EmitterEntry {
    /// Plugin manifest with metadata and the entry-point triple.
    pub manifest: PluginManifest,
    /// Factory for creating emitter instances.
    pub factory: Box<dyn EmitterFactory>,
}

impl std::fmt::Debug for EmitterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitterEntry")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

/// Registry of emitter plugins keyed by entry point.
pub struct EmitterRegistry {
    entries: HashMap<(String, String), EmitterEntry>,
}

impl EmitterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a plugin under its manifest's entry point.
    ///
    /// A later registration under the same `(group, key)` replaces the
    /// earlier one.
    pub fn register(&mut self, manifest: PluginManifest, factory: Box<dyn EmitterFactory>) {
        let group = manifest.entry_point.group.clone();
        let key = manifest.entry_point.key.clone();
        tracing::debug!(group = %group, key = %key, plugin = %manifest.name, "registered emitter plugin");
        self.entries
            .insert((group, key), EmitterEntry { manifest, factory });
    }

    /// Get a plugin entry by its entry-point group and key.
    pub fn get(&self, group: &str, key: &str) -> Option<&EmitterEntry> {
        self.entries.get(&(group.to_string(), key.to_string()))
    }

    /// Create an emitter for the given entry point from the host's settings.
    pub fn create(
        &self,
        group: &str,
        key: &str,
        settings: &serde_json::Value,
    ) -> Result<Box<dyn EventEmitter>, RunnerError> {
        let entry = self.get(group, key).ok_or_else(|| RunnerError::PluginNotFound {
            group: group.to_string(),
            key: key.to_string(),
        })?;
        entry.factory.create(settings)
    }

    /// List all plugin entries, sorted by group then key.
    pub fn list_all(&self) -> Vec<&EmitterEntry> {
        let mut entries: Vec<&EmitterEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            (&a.manifest.entry_point.group, &a.manifest.entry_point.key)
                .cmp(&(&b.manifest.entry_point.group, &b.manifest.entry_point.key))
        });
        entries
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
