// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::PAUSED_BY_ANNOTATION;
use serde_json::json;

#[yare::parameterized(
    add_field       = { json!({ "a": 1 }), json!({ "b": 2 }), json!({ "a": 1, "b": 2 }) },
    replace_field   = { json!({ "a": 1 }), json!({ "a": 3 }), json!({ "a": 3 }) },
    remove_field    = { json!({ "a": 1, "b": 2 }), json!({ "a": null }), json!({ "b": 2 }) },
    nested_merge    = { json!({ "s": { "x": 1, "y": 2 } }), json!({ "s": { "y": null, "z": 3 } }), json!({ "s": { "x": 1, "z": 3 } }) },
    array_replaced  = { json!({ "l": [1, 2] }), json!({ "l": [3] }), json!({ "l": [3] }) },
    scalar_to_obj   = { json!({ "s": "x" }), json!({ "s": { "k": 1 } }), json!({ "s": { "k": 1 } }) },
)]
fn merge_patch_follows_rfc7386(doc: Value, patch: Value, expected: Value) {
    let mut doc = doc;
    merge_patch(&mut doc, &patch);
    assert_eq!(doc, expected);
}

#[tokio::test]
async fn fake_patch_updates_sync_policy_and_annotations() {
    let client = FakeKubeClient::new().with_app(
        "argocd",
        "app",
        Some(json!({ "automated": { "prune": true }, "syncOptions": ["A=b"] })),
    );
    let target = TargetRef::new("argocd", "app");

    client
        .patch(
            &target,
            &json!({
                "metadata": { "annotations": { PAUSED_BY_ANNOTATION: "run-1" } },
                "spec": { "syncPolicy": { "automated": null } }
            }),
        )
        .await
        .unwrap();

    let app = client.get(&target).await.unwrap();
    assert_eq!(app.sync_policy, Some(json!({ "syncOptions": ["A=b"] })));
    assert_eq!(app.paused_by(), Some("run-1"));
    assert_eq!(client.patches().len(), 1);
}

#[tokio::test]
async fn fake_get_of_unknown_app_is_not_found() {
    let client = FakeKubeClient::new();
    let err = client.get(&TargetRef::new("argocd", "missing")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn fake_list_filters_by_namespace() {
    let client = FakeKubeClient::new()
        .with_app("argocd", "a", None)
        .with_app("openshift-gitops", "b", None);

    let apps = client.list(Some("openshift-gitops"), Some("team=infra")).await.unwrap();

    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].target.name, "b");
    assert_eq!(
        client.lists(),
        vec![ListCall {
            namespace: Some("openshift-gitops".to_string()),
            selector: Some("team=infra".to_string())
        }]
    );
}

#[tokio::test]
async fn fake_phase_queue_sticks_on_last_value() {
    let client = FakeKubeClient::new();
    let target = TargetRef::new("backup", "restore-acm");
    client.push_phases(WatchedKind::Restore, &target, &[None, Some("Started"), Some("Finished")]);

    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(client.phase(WatchedKind::Restore, &target).await.unwrap());
    }

    assert_eq!(
        seen,
        vec![
            None,
            Some("Started".to_string()),
            Some("Finished".to_string()),
            Some("Finished".to_string())
        ]
    );
}
