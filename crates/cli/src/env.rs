// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use anyhow::{anyhow, Result};
use hs_core::{parse_duration, PollConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Resolve state directory: HS_STATE_DIR > XDG_STATE_HOME/hubswitch > ~/.local/state/hubswitch
pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = non_empty("HS_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("hubswitch"));
    }
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow!("cannot locate a state directory; set HS_STATE_DIR"))?;
    Ok(home.join(".local/state/hubswitch"))
}

/// Poll timeout override (`HS_POLL_TIMEOUT`, e.g. `15m`)
pub fn poll_timeout() -> Option<Duration> {
    non_empty("HS_POLL_TIMEOUT").and_then(|s| parse_duration(&s).ok())
}

/// Poll interval override (`HS_POLL_INTERVAL`, e.g. `10s`)
pub fn poll_interval() -> Option<Duration> {
    non_empty("HS_POLL_INTERVAL").and_then(|s| parse_duration(&s).ok())
}

/// Default kube context when `--context` is not given
pub fn kube_context() -> Option<String> {
    non_empty("HS_KUBE_CONTEXT")
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Settings resolved once from flags and the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested kube context; `None` means the kubeconfig current-context
    pub context: Option<String>,
    pub poll: PollConfig,
}

impl Config {
    pub fn resolve(context_flag: Option<String>) -> Self {
        let defaults = PollConfig::default();
        Self {
            context: context_flag.or_else(kube_context),
            poll: PollConfig {
                timeout: poll_timeout().unwrap_or(defaults.timeout),
                interval: poll_interval().unwrap_or(defaults.interval),
            },
        }
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Default pause state file for a context: `<state_dir>/argocd-pause-<context>.json`
    pub fn default_state_path(&self, context: &str) -> Result<PathBuf> {
        Ok(state_dir()?.join(state_file_name(context)))
    }
}

/// Context names routinely carry `/` and `:` (EKS ARNs, OpenShift users).
pub fn state_file_name(context: &str) -> String {
    let safe: String = context
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '_' })
        .collect();
    format!("argocd-pause-{safe}.json")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
