// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hubswitch argocd` - pause, resume and inspect application auto-sync

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use hs_adapters::{ConsoleReporter, KubeClient};
use hs_core::TargetRef;
use hs_engine::{
    load_record, ArgoPauser, BatchSummary, PauseRequest, ResumeOptions, Selection, WorkflowError,
};
use hs_storage::FsStateStore;

use crate::env::Config;
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ArgocdArgs {
    #[command(subcommand)]
    pub command: ArgocdCommand,
}

#[derive(Subcommand)]
pub enum ArgocdCommand {
    /// Disable auto-sync and record each application's sync policy
    Pause {
        /// Only applications in this namespace (default: all namespaces)
        #[arg(short, long)]
        namespace: Option<String>,
        /// Label selector, e.g. `team=platform`
        #[arg(short = 'l', long)]
        selector: Option<String>,
        /// Pause exactly this application (repeatable); skips discovery
        #[arg(
            long = "app",
            value_name = "NAMESPACE/NAME",
            conflicts_with_all = ["namespace", "selector"]
        )]
        apps: Vec<TargetRef>,
        /// State file to write (default: <state dir>/argocd-pause-<context>.json)
        #[arg(long)]
        state_file: Option<PathBuf>,
        /// Show what would be paused without patching anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Restore the sync policies recorded by `pause`
    Resume {
        /// State file to read (default: <state dir>/argocd-pause-<context>.json)
        #[arg(long)]
        state_file: Option<PathBuf>,
        /// Resume even if the state file was written for another context
        #[arg(long)]
        ignore_context: bool,
        /// Show what would be resumed without patching anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show auto-sync state and pause markers
    Status {
        /// Only applications in this namespace (default: all namespaces)
        #[arg(short, long)]
        namespace: Option<String>,
        /// Label selector, e.g. `team=platform`
        #[arg(short = 'l', long)]
        selector: Option<String>,
        #[arg(short = 'o', long, value_enum, default_value_t)]
        output: OutputFormat,
    },
}

pub async fn handle(command: ArgocdCommand, config: &Config) -> Result<()> {
    match command {
        ArgocdCommand::Pause { namespace, selector, apps, state_file, dry_run } => {
            let (pauser, context) = connect(config).await?;
            let state_path = match state_file {
                Some(path) => path,
                None => config.default_state_path(&context)?,
            };
            let selection = if apps.is_empty() {
                Selection::Discover { namespace, selector }
            } else {
                Selection::Explicit(apps)
            };
            let summary = pauser.pause(&PauseRequest { selection, state_path, dry_run }).await?;
            finish(summary)
        }
        ArgocdCommand::Resume { state_file, ignore_context, dry_run } => {
            // Read the record before touching the cluster so a bad state file
            // fails fast and offline.
            let path = match state_file {
                Some(path) => path,
                None => config.default_state_path(&KubeClient::resolve_context(config.context())?)?,
            };
            let record = load_record(&FsStateStore::new(), &path)?;

            let (pauser, _) = connect(config).await?;
            let summary = pauser
                .resume_record(&record, &path, ResumeOptions { ignore_context, dry_run })
                .await
                .map_err(|e| match e {
                    WorkflowError::ContextMismatch { .. } => {
                        anyhow!("{e}; pass --ignore-context to resume anyway")
                    }
                    other => other.into(),
                })?;
            finish(summary)
        }
        ArgocdCommand::Status { namespace, selector, output } => {
            let (pauser, _) = connect(config).await?;
            let rows = pauser.status(namespace.as_deref(), selector.as_deref()).await?;
            match output {
                OutputFormat::Text => {
                    output::write_status_table(&mut std::io::stdout().lock(), &rows)?;
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&output::status_json(&rows))?);
                }
            }
            Ok(())
        }
    }
}

type Pauser = ArgoPauser<KubeClient, FsStateStore, ConsoleReporter>;

/// Connect to the cluster and return the pauser with its resolved context.
async fn connect(config: &Config) -> Result<(Pauser, String)> {
    let client = KubeClient::connect(config.context()).await?;
    let context = client.context().to_string();
    let pauser = ArgoPauser::new(client, FsStateStore::new(), ConsoleReporter, context.clone());
    Ok((pauser, context))
}

/// Per-target failures were already reported line by line.
fn finish(summary: BatchSummary) -> Result<()> {
    if summary.is_success() {
        Ok(())
    } else {
        Err(ExitError::silent().into())
    }
}

#[cfg(test)]
#[path = "argocd_tests.rs"]
mod tests;
