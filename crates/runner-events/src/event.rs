// SPDX-FileCopyrightText: 2026 Runner Events Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event payloads delivered by the host runner.
//!
//! The runner emits one [`RunnerEvent`] per unit of job output and a
//! [`StatusEvent`] on every lifecycle transition. Payloads carry
//! runner-version-specific detail beyond the fields named here, so both
//! types keep unrecognized fields in a flattened map and forward them
//! losslessly.

use serde::{Deserialize, Serialize};

/// A single execution event from the host runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerEvent {
    /// Unique identifier assigned to the event by the runner.
    pub uuid: String,
    /// Monotonic event counter within one job run.
    pub counter: u64,
    /// Event kind (e.g., "runner_on_ok", "verbose").
    pub event: String,
    /// Captured output line, if the event carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    /// Remaining payload fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A job status transition from the host runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    /// New job status (e.g., "starting", "running", "successful", "failed").
    pub status: String,
    /// Identifier of the run this status belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_ident: Option<String>,
    /// Remaining payload fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
