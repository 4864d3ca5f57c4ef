// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Switchover workflows: Argo CD pause/resume and phase waits.

pub mod argocd;
mod error;
pub mod wait;

pub use argocd::{
    load_record, AppStatus, ArgoPauser, BatchSummary, PauseRequest, ResumeOptions, Selection,
};
pub use error::WorkflowError;
pub use wait::wait_for_phase;
