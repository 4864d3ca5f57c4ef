// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential batch mutation with per-target failure tracking.
//!
//! Every target is attempted exactly once, in order. A failed target is
//! reported and counted but never stops the batch, and a later failure never
//! rolls back an earlier success. The accepted list only ever contains
//! targets whose read and write both succeeded.

use crate::report::Reporter;
use crate::PriorState;
use std::fmt;
use std::future::Future;
use thiserror::Error;

/// Why a single target's mutation did not complete
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    /// Current state could not be read
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The write was rejected or failed to apply
    #[error("patch failed: {0}")]
    Patch(String),
}

/// Terminal state of one target's attempt.
///
/// `Pending -> Fetched -> Mutated`, or `Pending -> FetchFailed`, or
/// `Fetched -> PatchFailed`. None of the failure states are retried within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    Mutated,
    FetchFailed,
    PatchFailed,
}

impl AttemptStatus {
    fn from_error(err: &MutationError) -> Self {
        match err {
            MutationError::Fetch(_) => AttemptStatus::FetchFailed,
            MutationError::Patch(_) => AttemptStatus::PatchFailed,
        }
    }
}

/// A target whose mutation fully succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<T> {
    pub target: T,
    pub prior_state: PriorState,
}

/// A target whose mutation failed
#[derive(Debug, Clone, PartialEq)]
pub struct Failed<T> {
    pub target: T,
    pub status: AttemptStatus,
    pub error: MutationError,
}

/// Outcome of one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult<T> {
    /// Successes in mutation order
    pub accepted: Vec<Accepted<T>>,
    pub failed: Vec<Failed<T>>,
}

impl<T> BatchResult<T> {
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// True only when no target failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Status of every attempted target, successes first.
    pub fn statuses(&self) -> impl Iterator<Item = (&T, AttemptStatus)> {
        self.accepted
            .iter()
            .map(|a| (&a.target, AttemptStatus::Mutated))
            .chain(self.failed.iter().map(|f| (&f.target, f.status)))
    }
}

/// Runs a mutation over an ordered list of targets.
///
/// `verb` prefixes each success line (`Paused ns/name`, `Resumed ns/name`).
pub struct Batch<R: Reporter> {
    verb: &'static str,
    reporter: R,
}

impl<R: Reporter> Batch<R> {
    pub fn new(verb: &'static str, reporter: R) -> Self {
        Self { verb, reporter }
    }

    /// Attempt `mutate` on every target in order.
    ///
    /// `mutate` receives an owned copy of the target and returns the state it
    /// captured before writing.
    pub async fn run<T, F, Fut>(&self, targets: &[T], mut mutate: F) -> BatchResult<T>
    where
        T: Clone + fmt::Display,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<PriorState, MutationError>>,
    {
        let mut result = BatchResult { accepted: Vec::new(), failed: Vec::new() };

        for target in targets {
            match mutate(target.clone()).await {
                Ok(prior_state) => {
                    tracing::info!(resource = %target, verb = self.verb, "mutation applied");
                    self.reporter.info(&format!("{} {}", self.verb, target));
                    result.accepted.push(Accepted { target: target.clone(), prior_state });
                }
                Err(error) => {
                    tracing::debug!(resource = %target, error = %error, "mutation failed");
                    self.reporter.error(&format!("Error: Failed to patch {target}: {error}"));
                    result.failed.push(Failed {
                        target: target.clone(),
                        status: AttemptStatus::from_error(&error),
                        error,
                    });
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
