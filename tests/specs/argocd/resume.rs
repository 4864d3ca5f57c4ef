// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `argocd resume` refuses bad state files before connecting anywhere.

use crate::prelude::*;

#[test]
fn missing_state_file_exits_one() {
    let scratch = Scratch::new();
    let path = scratch.path().join("nope.json");
    scratch
        .hubswitch()
        .args(&["argocd", "resume", "--state-file", path.to_str().unwrap()])
        .exits(1)
        .stderr_has("state file not found");
}

#[test]
fn corrupt_state_file_exits_one() {
    let scratch = Scratch::new();
    let path = scratch.file("pause.json", "{ not json");
    scratch
        .hubswitch()
        .args(&["argocd", "resume", "--state-file", path.to_str().unwrap()])
        .exits(1)
        .stderr_has("failed to parse state file");
}

#[test]
fn dry_run_still_validates_the_state_file() {
    let scratch = Scratch::new();
    let path = scratch.file("pause.json", r#"{"run_id": 7}"#);
    scratch
        .hubswitch()
        .args(&["argocd", "resume", "--dry-run", "--state-file", path.to_str().unwrap()])
        .exits(1)
        .stderr_has("failed to parse state file");
}

#[test]
fn default_state_file_is_named_after_the_current_context() {
    let scratch = Scratch::new();
    scratch.kubeconfig("hub-a");
    scratch
        .hubswitch()
        .args(&["argocd", "resume"])
        .exits(1)
        .stderr_has("argocd-pause-hub-a.json");
}

#[test]
fn context_flag_picks_the_default_state_file() {
    let scratch = Scratch::new();
    scratch.kubeconfig("hub-a");
    scratch
        .hubswitch()
        .args(&["--context", "hub-b", "argocd", "resume"])
        .exits(1)
        .stderr_has("argocd-pause-hub-b.json");
}

#[test]
fn context_env_picks_the_default_state_file() {
    let scratch = Scratch::new();
    scratch.kubeconfig("hub-a");
    scratch
        .hubswitch()
        .env("HS_KUBE_CONTEXT", "hub-c")
        .args(&["argocd", "resume"])
        .exits(1)
        .stderr_has("argocd-pause-hub-c.json");
}
