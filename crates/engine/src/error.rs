// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use hs_adapters::ClientError;
use hs_storage::StateFileError;
use thiserror::Error;

/// Errors that abort a workflow before or after its batch
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    StateFile(#[from] StateFileError),
    #[error(
        "state file was written for context '{recorded}' but the current context is '{current}'"
    )]
    ContextMismatch { recorded: String, current: String },
    #[error("failed to list applications: {0}")]
    Discovery(#[source] ClientError),
}
