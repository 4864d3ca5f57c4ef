// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hs_adapters::FakeKubeClient;
use hs_core::{FakeReporter, Level, PollConfig};
use std::time::Duration;

fn poller(reporter: &FakeReporter) -> Poller<FakeReporter> {
    Poller::new(
        PollConfig { timeout: Duration::from_secs(60), interval: Duration::from_secs(10) },
        reporter.clone(),
    )
}

fn restore() -> TargetRef {
    TargetRef::new("open-cluster-management-backup", "restore-acm")
}

#[tokio::test(start_paused = true)]
async fn waits_until_restore_finishes() {
    let client = FakeKubeClient::new();
    client.push_phases(WatchedKind::Restore, &restore(), &[None, Some("Started"), Some("Finished")]);
    let reporter = FakeReporter::new();

    let ok = wait_for_phase(
        &client,
        &poller(&reporter),
        WatchedKind::Restore,
        &restore(),
        &["Finished".to_string()],
    )
    .await;

    assert!(ok);
    assert_eq!(
        reporter.at(Level::Debug),
        vec![
            "Waiting for Restore open-cluster-management-backup/restore-acm to reach phase Finished (0s elapsed): no phase reported yet".to_string(),
            "Waiting for Restore open-cluster-management-backup/restore-acm to reach phase Finished (10s elapsed): phase Started".to_string(),
        ]
    );
    assert!(reporter.contains("phase Finished"));
}

#[tokio::test(start_paused = true)]
async fn accepts_any_of_several_phases() {
    let client = FakeKubeClient::new();
    let hub = TargetRef::new("open-cluster-management", "multiclusterhub");
    client.push_phases(WatchedKind::MultiClusterHub, &hub, &[Some("Paused")]);
    let reporter = FakeReporter::new();

    let ok = wait_for_phase(
        &client,
        &poller(&reporter),
        WatchedKind::MultiClusterHub,
        &hub,
        &["Running".to_string(), "Paused".to_string()],
    )
    .await;

    assert!(ok);
}

#[tokio::test(start_paused = true)]
async fn missing_resource_times_out() {
    let client = FakeKubeClient::new();
    let reporter = FakeReporter::new();

    let ok = wait_for_phase(
        &client,
        &poller(&reporter),
        WatchedKind::BackupSchedule,
        &TargetRef::new("open-cluster-management-backup", "schedule-acm"),
        &["Enabled".to_string()],
    )
    .await;

    assert!(!ok);
    assert!(reporter.at(Level::Debug).iter().all(|l| l.ends_with("not found yet")));
    assert_eq!(reporter.at(Level::Warn).len(), 1);
    assert!(reporter.at(Level::Warn)[0].ends_with("after 1m"));
}
