// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event emitter plugin convention for the runner event pipeline.
//!
//! The host runner delivers execution events (one per output line) and
//! status changes to registered emitter plugins. This crate defines the
//! contract those plugins implement: the event payload types, the
//! [`EventEmitter`] trait, the `plugin.toml` manifest format with its
//! entry-point declaration, and the registry that resolves a
//! `(group, key)` pair to an emitter factory.

pub mod emitter;
pub mod error;
pub mod event;
pub mod manifest;
pub mod registry;

pub use emitter::EventEmitter;
pub use error::RunnerError;
pub use event::{RunnerEvent, StatusEvent};
pub use manifest::{parse_plugin_manifest, EntryPoint, PluginManifest};
pub use registry::{EmitterEntry, EmitterFactory, EmitterRegistry};
