// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waiting for control-plane resources to reach a phase.

use hs_adapters::{ClientError, StatusClient, WatchedKind};
use hs_core::{Poller, Reporter, TargetRef};

/// Poll `status.phase` of `target` until it is one of `phases`.
///
/// Lookup errors (including the resource not existing yet) count as "not
/// done" rather than failures, since restores and hubs are often created
/// while the wait is already running.
pub async fn wait_for_phase<C, R>(
    client: &C,
    poller: &Poller<R>,
    kind: WatchedKind,
    target: &TargetRef,
    phases: &[String],
) -> bool
where
    C: StatusClient,
    R: Reporter,
{
    let description = format!("{kind} {target} to reach phase {}", phases.join("|"));

    poller
        .wait_for(&description, move || async move {
            match client.phase(kind, target).await {
                Ok(Some(phase)) => {
                    let done = phases.iter().any(|p| p == &phase);
                    (done, format!("phase {phase}"))
                }
                Ok(None) => (false, "no phase reported yet".to_string()),
                Err(ClientError::NotFound(_)) => (false, "not found yet".to_string()),
                Err(e) => {
                    tracing::debug!(%kind, resource = %target, error = %e, "phase lookup failed");
                    (false, e.to_string())
                }
            }
        })
        .await
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
