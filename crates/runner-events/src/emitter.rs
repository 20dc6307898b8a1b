// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all event emitter plugins must implement.

use async_trait::async_trait;

use crate::error::RunnerError;
use crate::event::{RunnerEvent, StatusEvent};

/// The contract between the host runner and an emitter plugin.
///
/// The runner calls [`emit_event`](EventEmitter::emit_event) for every
/// execution event and [`emit_status`](EventEmitter::emit_status) on every
/// lifecycle transition. Whether a delivery failure aborts the run is the
/// runner's decision; emitters report failures and do not retry internally.
#[async_trait]
pub trait EventEmitter: Send + Sync + 'static {
    /// Returns the plugin key this emitter is registered under (e.g., "http").
    fn name(&self) -> &str;

    /// Returns the semantic version of this emitter.
    fn version(&self) -> semver::Version;

    /// Delivers one execution event.
    async fn emit_event(&self, event: &RunnerEvent) -> Result<(), RunnerError>;

    /// Delivers one status transition.
    async fn emit_status(&self, status: &StatusEvent) -> Result<(), RunnerError>;

    /// Gracefully shuts down the emitter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), RunnerError>;
}

impl std::fmt::Debug for dyn EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
