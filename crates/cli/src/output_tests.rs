// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hs_core::TargetRef;
use serial_test::serial;

fn row(ns: &str, name: &str, auto_sync: bool, paused_by: Option<&str>) -> AppStatus {
    AppStatus {
        target: TargetRef::new(ns, name),
        auto_sync,
        paused_by: paused_by.map(str::to_string),
    }
}

fn render(rows: &[AppStatus]) -> String {
    std::env::set_var("NO_COLOR", "1");
    let mut buf = Vec::new();
    write_status_table(&mut buf, rows).unwrap();
    std::env::remove_var("NO_COLOR");
    String::from_utf8(buf).unwrap()
}

#[test]
#[serial]
fn empty_table_says_so() {
    assert_eq!(render(&[]), "No applications found\n");
}

#[test]
#[serial]
fn table_aligns_columns() {
    let text = render(&[
        row("argocd", "guestbook", true, None),
        row("openshift-gitops", "policies", false, Some("run-1")),
    ]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "APPLICATION                AUTO-SYNC  PAUSED-BY");
    assert_eq!(lines[1], "argocd/guestbook           enabled    -");
    assert_eq!(lines[2], "openshift-gitops/policies  disabled   run-1");
}

#[test]
fn json_carries_every_field() {
    let value = status_json(&[row("argocd", "guestbook", false, Some("run-1"))]);
    assert_eq!(
        value,
        json!([{ "namespace": "argocd", "name": "guestbook", "auto_sync": false, "paused_by": "run-1" }])
    );
}
