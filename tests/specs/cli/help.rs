// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn help_shows_usage_and_commands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("argocd").stdout_has("wait");
}

#[test]
fn argocd_help_lists_subcommands() {
    cli()
        .args(&["argocd", "--help"])
        .passes()
        .stdout_has("pause")
        .stdout_has("resume")
        .stdout_has("status");
}

#[test]
fn pause_help_documents_flags() {
    cli()
        .args(&["argocd", "pause", "--help"])
        .passes()
        .stdout_has("--app")
        .stdout_has("--state-file")
        .stdout_has("--dry-run");
}

#[test]
fn wait_help_lists_kinds() {
    cli()
        .args(&["wait", "--help"])
        .passes()
        .stdout_has("restore")
        .stdout_has("backup-schedule")
        .stdout_has("multiclusterhub");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("hubswitch 0.2");
}

#[test]
fn help_is_plain_without_color() {
    cli().args(&["--help"]).passes().stdout_lacks("\x1b[");
}
