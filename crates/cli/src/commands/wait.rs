// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hubswitch wait` - block until a control-plane resource reaches a phase

use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};
use hs_adapters::{ConsoleReporter, KubeClient, WatchedKind};
use hs_core::{parse_duration, PollConfig, Poller, TargetRef};
use hs_engine::wait_for_phase;

use crate::env::Config;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct WaitArgs {
    /// Resource kind
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Resource name
    pub name: String,
    /// Namespace (default: the operator namespace for the kind)
    #[arg(short, long)]
    pub namespace: Option<String>,
    /// Phase that counts as done, repeatable (default: Finished, Enabled or Running by kind)
    #[arg(long = "phase", value_name = "PHASE")]
    pub phases: Vec<String>,
    /// Give up after this long, e.g. `10m` (default: HS_POLL_TIMEOUT or 10m)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
    /// Time between checks, e.g. `30s` (default: HS_POLL_INTERVAL or 30s)
    #[arg(long, value_parser = parse_duration)]
    pub interval: Option<Duration>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Restore,
    BackupSchedule,
    #[value(name = "multiclusterhub", alias = "mch")]
    MultiClusterHub,
}

impl From<KindArg> for WatchedKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Restore => WatchedKind::Restore,
            KindArg::BackupSchedule => WatchedKind::BackupSchedule,
            KindArg::MultiClusterHub => WatchedKind::MultiClusterHub,
        }
    }
}

impl WaitArgs {
    fn target(&self, kind: WatchedKind) -> TargetRef {
        let namespace = self.namespace.as_deref().unwrap_or(kind.default_namespace());
        TargetRef::new(namespace, self.name.as_str())
    }

    fn phases(&self, kind: WatchedKind) -> Vec<String> {
        if self.phases.is_empty() {
            vec![kind.default_phase().to_string()]
        } else {
            self.phases.clone()
        }
    }

    fn poll_config(&self, config: &Config) -> PollConfig {
        PollConfig {
            timeout: self.timeout.unwrap_or(config.poll.timeout),
            interval: self.interval.unwrap_or(config.poll.interval),
        }
    }
}

pub async fn handle(args: WaitArgs, config: &Config) -> Result<()> {
    let kind = WatchedKind::from(args.kind);
    let target = args.target(kind);
    let phases = args.phases(kind);
    let poller = Poller::new(args.poll_config(config), ConsoleReporter);

    let client = KubeClient::connect(config.context()).await?;
    if wait_for_phase(&client, &poller, kind, &target, &phases).await {
        Ok(())
    } else {
        // The poller already reported the timeout.
        Err(ExitError::silent().into())
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
