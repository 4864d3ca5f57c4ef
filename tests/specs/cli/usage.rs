// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage errors exit 2 before anything touches a cluster.

use crate::prelude::*;

#[test]
fn no_subcommand_is_a_usage_error() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn zero_timeout_is_rejected() {
    cli()
        .args(&["wait", "restore", "restore-acm", "--timeout", "0"])
        .exits(2)
        .stderr_has("--timeout");
}

#[test]
fn unknown_duration_unit_is_rejected() {
    cli().args(&["wait", "restore", "restore-acm", "--interval", "3d"]).exits(2);
}

#[test]
fn unknown_wait_kind_is_rejected() {
    cli().args(&["wait", "deployment", "x"]).exits(2);
}

#[test]
fn malformed_app_is_rejected() {
    cli().args(&["argocd", "pause", "--app", "guestbook"]).exits(2).stderr_has("guestbook");
}

#[test]
fn app_conflicts_with_selector() {
    cli().args(&["argocd", "pause", "--app", "argocd/guestbook", "-l", "team=a"]).exits(2);
}
