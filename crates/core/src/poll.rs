// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Condition polling with a fixed interval and a final check on timeout.

use crate::report::Reporter;
use crate::time_fmt::format_duration;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(600);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Timing for a [`Poller`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_POLL_TIMEOUT, interval: DEFAULT_POLL_INTERVAL }
    }
}

/// Repeatedly evaluates a condition until it reports done or time runs out.
#[derive(Clone)]
pub struct Poller<R: Reporter> {
    config: PollConfig,
    reporter: R,
}

impl<R: Reporter> Poller<R> {
    pub fn new(config: PollConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> PollConfig {
        self.config
    }

    /// Wait until `condition` yields `(true, detail)`.
    ///
    /// The first evaluation happens immediately. While elapsed time is below
    /// the timeout, each miss is followed by exactly one `interval` sleep.
    /// Once the loop exits the condition is evaluated one more time, so a
    /// transition landing between the last in-loop check and the deadline is
    /// still observed. Returns `false` on timeout; never errors.
    pub async fn wait_for<F, Fut>(&self, description: &str, mut condition: F) -> bool
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = (bool, String)>,
    {
        let start = Instant::now();

        while start.elapsed() < self.config.timeout {
            let (done, detail) = condition().await;
            if done {
                self.completed(description, &detail);
                return true;
            }

            let elapsed = format_duration(start.elapsed());
            if detail.is_empty() {
                self.reporter.debug(&format!("Waiting for {description} ({elapsed} elapsed)"));
            } else {
                self.reporter
                    .debug(&format!("Waiting for {description} ({elapsed} elapsed): {detail}"));
            }
            tokio::time::sleep(self.config.interval).await;
        }

        let (done, detail) = condition().await;
        if done {
            self.completed(description, &detail);
            return true;
        }

        tracing::debug!(description, timeout_secs = self.config.timeout.as_secs(), "poll timed out");
        self.reporter.warn(&format!(
            "Timed out waiting for {description} after {}",
            format_duration(self.config.timeout)
        ));
        false
    }

    fn completed(&self, description: &str, detail: &str) {
        tracing::debug!(description, detail, "poll condition met");
        if detail.is_empty() {
            self.reporter.info(&format!("Done waiting for {description}"));
        } else {
            self.reporter.info(&format!("Done waiting for {description}: {detail}"));
        }
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
