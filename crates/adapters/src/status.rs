// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control-plane resources whose `status.phase` the switchover waits on.

use std::fmt;

/// A resource kind with a phase worth waiting for during a switchover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchedKind {
    /// `Restore` from the cluster backup operator
    Restore,
    /// `BackupSchedule` from the cluster backup operator
    BackupSchedule,
    /// The hub's `MultiClusterHub`
    MultiClusterHub,
}

impl WatchedKind {
    pub fn group(self) -> &'static str {
        match self {
            WatchedKind::Restore | WatchedKind::BackupSchedule => {
                "cluster.open-cluster-management.io"
            }
            WatchedKind::MultiClusterHub => "operator.open-cluster-management.io",
        }
    }

    pub fn version(self) -> &'static str {
        match self {
            WatchedKind::Restore | WatchedKind::BackupSchedule => "v1beta1",
            WatchedKind::MultiClusterHub => "v1",
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            WatchedKind::Restore => "Restore",
            WatchedKind::BackupSchedule => "BackupSchedule",
            WatchedKind::MultiClusterHub => "MultiClusterHub",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            WatchedKind::Restore => "restores",
            WatchedKind::BackupSchedule => "backupschedules",
            WatchedKind::MultiClusterHub => "multiclusterhubs",
        }
    }

    /// Namespace the operator installs this kind into by default
    pub fn default_namespace(self) -> &'static str {
        match self {
            WatchedKind::Restore | WatchedKind::BackupSchedule => "open-cluster-management-backup",
            WatchedKind::MultiClusterHub => "open-cluster-management",
        }
    }

    /// Phase that means the resource has converged
    pub fn default_phase(self) -> &'static str {
        match self {
            WatchedKind::Restore => "Finished",
            WatchedKind::BackupSchedule => "Enabled",
            WatchedKind::MultiClusterHub => "Running",
        }
    }
}

impl fmt::Display for WatchedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
