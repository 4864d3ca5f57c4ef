// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure type definitions for the persisted batch run record.

use crate::{PriorState, TargetRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state file written by a pause batch and consumed by resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRunRecord {
    /// Random identifier for the pause run (uuid v4)
    pub run_id: String,
    /// Kube context the batch targeted
    pub context: String,
    pub paused_at: DateTime<Utc>,
    /// Applications whose capture and patch both succeeded, in mutation order
    #[serde(default)]
    pub apps: Vec<PausedApp>,
}

impl BatchRunRecord {
    /// Start an empty record for a new run against `context`.
    pub fn new(context: impl Into<String>, paused_at: DateTime<Utc>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            context: context.into(),
            paused_at,
            apps: Vec::new(),
        }
    }
}

/// A paused application together with the sync policy it had before pausing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausedApp {
    pub namespace: String,
    pub name: String,
    /// `spec.syncPolicy` as captured; `null` when the application had none
    #[serde(default)]
    pub original_sync_policy: PriorState,
}

impl PausedApp {
    pub fn new(target: TargetRef, original_sync_policy: PriorState) -> Self {
        Self { namespace: target.namespace, name: target.name, original_sync_policy }
    }

    pub fn target(&self) -> TargetRef {
        TargetRef::new(&self.namespace, &self.name)
    }
}

impl fmt::Display for PausedApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
