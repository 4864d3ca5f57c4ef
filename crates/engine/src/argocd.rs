// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pausing and resuming Argo CD auto-sync around a switchover.
//!
//! # Pause
//!
//! Each target is read fresh, its `spec.syncPolicy` captured verbatim, and
//! then merge-patched to drop `automated` and carry the
//! [`PAUSED_BY_ANNOTATION`] marker. Once every target has been attempted the
//! accepted list is written to the state file, even when it is empty or some
//! targets failed.
//!
//! # Resume
//!
//! The state file is loaded (any read or parse failure aborts before the
//! first patch), its context checked against the live one, and each recorded
//! sync policy restored exactly, dropping keys added while paused. Resume
//! never writes the state file.

use crate::WorkflowError;
use chrono::Utc;
use hs_adapters::{ApplicationClient, PAUSED_BY_ANNOTATION};
use hs_core::{
    Batch, BatchResult, BatchRunRecord, MutationError, PausedApp, PriorState, Reporter, TargetRef,
};
use hs_storage::StateStore;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

/// Which applications a pause run targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every application with automated sync, optionally narrowed
    Discover { namespace: Option<String>, selector: Option<String> },
    /// Exactly these applications, in this order
    Explicit(Vec<TargetRef>),
}

#[derive(Debug, Clone)]
pub struct PauseRequest {
    pub selection: Selection,
    pub state_path: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeOptions {
    /// Resume even when the record was written for another context
    pub ignore_context: bool,
    pub dry_run: bool,
}

/// Aggregate result of a pause or resume batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn from_result<T>(result: &BatchResult<T>) -> Self {
        Self {
            attempted: result.accepted.len() + result.failed.len(),
            succeeded: result.accepted.len(),
            failed: result.failure_count(),
        }
    }

    /// True only when no target failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// One row of `argocd status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStatus {
    pub target: TargetRef,
    pub auto_sync: bool,
    /// Run id from the pause marker annotation
    pub paused_by: Option<String>,
}

/// Load a state file for resume.
pub fn load_record<S: StateStore>(store: &S, path: &Path) -> Result<BatchRunRecord, WorkflowError> {
    let record = store.read(path)?;
    tracing::info!(
        path = %path.display(),
        run_id = %record.run_id,
        context = %record.context,
        apps = record.apps.len(),
        "loaded state file"
    );
    Ok(record)
}

/// Pauses and resumes Argo CD applications on one cluster context.
pub struct ArgoPauser<C, S, R> {
    client: C,
    store: S,
    reporter: R,
    context: String,
}

impl<C, S, R> ArgoPauser<C, S, R>
where
    C: ApplicationClient,
    S: StateStore,
    R: Reporter,
{
    pub fn new(client: C, store: S, reporter: R, context: impl Into<String>) -> Self {
        Self { client, store, reporter, context: context.into() }
    }

    /// Resolve a selection to an ordered target list.
    pub async fn targets(&self, selection: &Selection) -> Result<Vec<TargetRef>, WorkflowError> {
        match selection {
            Selection::Explicit(targets) => Ok(targets.clone()),
            Selection::Discover { namespace, selector } => {
                let apps = self
                    .client
                    .list(namespace.as_deref(), selector.as_deref())
                    .await
                    .map_err(WorkflowError::Discovery)?;
                let total = apps.len();
                let targets: Vec<TargetRef> = apps
                    .into_iter()
                    .filter(|app| app.auto_sync_enabled())
                    .map(|app| app.target)
                    .collect();
                tracing::debug!(total, auto_sync = targets.len(), "discovered applications");
                Ok(targets)
            }
        }
    }

    /// Disable auto-sync on the selected applications and record what changed.
    pub async fn pause(&self, req: &PauseRequest) -> Result<BatchSummary, WorkflowError> {
        let targets = self.targets(&req.selection).await?;
        if targets.is_empty() {
            self.reporter.info("No applications with automated sync found");
        }

        if req.dry_run {
            for target in &targets {
                self.reporter.info(&format!("Would pause {target}"));
            }
            return Ok(BatchSummary { attempted: targets.len(), ..Default::default() });
        }

        let mut record = BatchRunRecord::new(&self.context, Utc::now());
        let run_id = record.run_id.clone();
        tracing::info!(%run_id, context = %self.context, targets = targets.len(), "pausing applications");

        let result = Batch::new("Paused", self.reporter.clone())
            .run(&targets, |target| self.pause_one(target, &run_id))
            .await;

        record.apps = result
            .accepted
            .iter()
            .map(|a| PausedApp::new(a.target.clone(), a.prior_state.clone()))
            .collect();

        if let Err(e) = self.store.write(&req.state_path, &record) {
            // Nothing else knows which applications were paused; surface them.
            if let Ok(json) = serde_json::to_string_pretty(&record) {
                self.reporter.error(&format!("Unsaved pause state:\n{json}"));
            }
            return Err(e.into());
        }

        let path = req.state_path.display();
        let summary = BatchSummary::from_result(&result);
        if summary.is_success() || record.apps.is_empty() {
            self.reporter.info(&format!("Wrote {} paused application(s) to {path}", record.apps.len()));
        } else {
            self.reporter.warn(&format!("Partial state written to {path}"));
        }
        if !summary.is_success() {
            self.reporter.error(&format!("Pause completed with {} patch failure(s).", summary.failed));
        }
        Ok(summary)
    }

    async fn pause_one(&self, target: TargetRef, run_id: &str) -> Result<PriorState, MutationError> {
        let app =
            self.client.get(&target).await.map_err(|e| MutationError::Fetch(e.to_string()))?;
        let prior = app.prior_state();

        let patch = json!({
            "metadata": { "annotations": { PAUSED_BY_ANNOTATION: run_id } },
            "spec": { "syncPolicy": { "automated": null } },
        });
        self.client
            .patch(&target, &patch)
            .await
            .map_err(|e| MutationError::Patch(e.to_string()))?;
        Ok(prior)
    }

    /// Load `path` and restore every recorded sync policy.
    pub async fn resume(
        &self,
        path: &Path,
        opts: ResumeOptions,
    ) -> Result<BatchSummary, WorkflowError> {
        let record = load_record(&self.store, path)?;
        self.resume_record(&record, path, opts).await
    }

    /// Restore every sync policy in a record already loaded from `path`.
    pub async fn resume_record(
        &self,
        record: &BatchRunRecord,
        path: &Path,
        opts: ResumeOptions,
    ) -> Result<BatchSummary, WorkflowError> {
        if record.context != self.context {
            if !opts.ignore_context {
                return Err(WorkflowError::ContextMismatch {
                    recorded: record.context.clone(),
                    current: self.context.clone(),
                });
            }
            self.reporter.warn(&format!(
                "State file context '{}' does not match current context '{}'; resuming anyway",
                record.context, self.context
            ));
        }

        if record.apps.is_empty() {
            // A pause re-run after a successful pause records nothing and
            // pushes the real record into the backup.
            match self.store.latest_backup(path) {
                Some(bak) => self.reporter.warn(&format!(
                    "State file {} lists no paused applications; the previous record is \
                     kept at {bak}, resume it with --state-file {bak}",
                    path.display(),
                    bak = bak.display(),
                )),
                None => self.reporter.info("State file lists no paused applications"),
            }
        }

        if opts.dry_run {
            for app in &record.apps {
                self.reporter.info(&format!("Would resume {app}"));
            }
            return Ok(BatchSummary { attempted: record.apps.len(), ..Default::default() });
        }

        tracing::info!(run_id = %record.run_id, apps = record.apps.len(), "resuming applications");
        let result = Batch::new("Resumed", self.reporter.clone())
            .run(&record.apps, |app| self.resume_one(app))
            .await;

        let summary = BatchSummary::from_result(&result);
        if summary.is_success() {
            self.reporter.info(&format!(
                "Resume completed: {} application(s) restored.",
                summary.succeeded
            ));
        } else {
            self.reporter
                .error(&format!("Resume completed with {} patch failure(s).", summary.failed));
        }
        Ok(summary)
    }

    async fn resume_one(&self, app: PausedApp) -> Result<PriorState, MutationError> {
        let target = app.target();
        let live =
            self.client.get(&target).await.map_err(|e| MutationError::Fetch(e.to_string()))?;

        let live_policy = live.prior_state();
        let patch = json!({
            "metadata": { "annotations": { PAUSED_BY_ANNOTATION: null } },
            "spec": { "syncPolicy": replacement_patch(&live_policy, &app.original_sync_policy) },
        });
        self.client
            .patch(&target, &patch)
            .await
            .map_err(|e| MutationError::Patch(e.to_string()))?;
        Ok(live_policy)
    }

    /// Auto-sync state of every application in scope.
    pub async fn status(
        &self,
        namespace: Option<&str>,
        selector: Option<&str>,
    ) -> Result<Vec<AppStatus>, WorkflowError> {
        let apps = self.client.list(namespace, selector).await.map_err(WorkflowError::Discovery)?;
        Ok(apps
            .into_iter()
            .map(|app| AppStatus {
                auto_sync: app.auto_sync_enabled(),
                paused_by: app.paused_by().map(str::to_string),
                target: app.target,
            })
            .collect())
    }
}

/// Merge patch that turns `live` into exactly `desired`.
///
/// A plain merge patch of `desired` would keep keys added to `live` since
/// the capture; those are nulled out, recursing into nested objects.
fn replacement_patch(live: &Value, desired: &Value) -> Value {
    let (Value::Object(live), Value::Object(desired)) = (live, desired) else {
        return desired.clone();
    };
    let mut patch: Map<String, Value> = live
        .keys()
        .filter(|k| !desired.contains_key(*k))
        .map(|k| (k.clone(), Value::Null))
        .collect();
    for (key, want) in desired {
        let entry = match live.get(key) {
            Some(have) => replacement_patch(have, want),
            None => want.clone(),
        };
        patch.insert(key.clone(), entry);
    }
    Value::Object(patch)
}

#[cfg(test)]
#[path = "argocd_tests.rs"]
mod tests;
