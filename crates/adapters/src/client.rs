// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{Application, WatchedKind};
use async_trait::async_trait;
use hs_core::TargetRef;
use serde_json::Value;
use thiserror::Error;

/// Errors from cluster resource operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("kubernetes API error: {0}")]
    Api(String),
    #[error("unexpected resource shape: {0}")]
    Decode(String),
    #[error("failed to configure kube client: {0}")]
    Config(String),
}

/// Read and patch Argo CD applications
#[async_trait]
pub trait ApplicationClient: Clone + Send + Sync + 'static {
    /// Fetch the live application.
    async fn get(&self, target: &TargetRef) -> Result<Application, ClientError>;

    /// Apply a JSON merge patch (RFC 7386) to the application.
    async fn patch(&self, target: &TargetRef, merge_patch: &Value) -> Result<(), ClientError>;

    /// List applications in `namespace` (all namespaces when `None`),
    /// optionally narrowed by a label selector.
    async fn list(
        &self,
        namespace: Option<&str>,
        selector: Option<&str>,
    ) -> Result<Vec<Application>, ClientError>;
}

/// Read `status.phase` of control-plane resources
#[async_trait]
pub trait StatusClient: Clone + Send + Sync + 'static {
    /// Current phase, `None` while the resource has not reported one.
    async fn phase(
        &self,
        kind: WatchedKind,
        target: &TargetRef,
    ) -> Result<Option<String>, ClientError>;
}

/// Apply an RFC 7386 JSON merge patch to `doc` in place.
#[cfg(any(test, feature = "test-support"))]
pub fn merge_patch(doc: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *doc = patch.clone();
        return;
    };
    if !doc.is_object() {
        *doc = Value::Object(serde_json::Map::new());
    }
    if let Value::Object(doc_map) = doc {
        for (key, value) in patch_map {
            if value.is_null() {
                doc_map.remove(key);
            } else {
                merge_patch(doc_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{merge_patch, ApplicationClient, ClientError, StatusClient};
    use crate::{Application, WatchedKind};
    use async_trait::async_trait;
    use hs_core::TargetRef;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::sync::Arc;

    /// Recorded list call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ListCall {
        pub namespace: Option<String>,
        pub selector: Option<String>,
    }

    #[derive(Default)]
    struct FakeState {
        apps: Vec<Application>,
        failing_gets: HashSet<TargetRef>,
        failing_patches: HashSet<TargetRef>,
        list_error: Option<String>,
        gets: Vec<TargetRef>,
        patches: Vec<(TargetRef, Value)>,
        lists: Vec<ListCall>,
        phases: HashMap<(WatchedKind, TargetRef), VecDeque<Option<String>>>,
    }

    /// In-memory cluster for testing
    #[derive(Clone, Default)]
    pub struct FakeKubeClient {
        inner: Arc<Mutex<FakeState>>,
    }

    impl FakeKubeClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add (or replace) an application, keeping insertion order for listing.
        pub fn insert_app(&self, app: Application) {
            let mut state = self.inner.lock();
            match state.apps.iter_mut().find(|a| a.target == app.target) {
                Some(existing) => *existing = app,
                None => state.apps.push(app),
            }
        }

        /// Convenience: add an application with the given sync policy.
        pub fn with_app(self, namespace: &str, name: &str, sync_policy: Option<Value>) -> Self {
            self.insert_app(Application::new(TargetRef::new(namespace, name), sync_policy));
            self
        }

        pub fn app(&self, target: &TargetRef) -> Option<Application> {
            self.inner.lock().apps.iter().find(|a| &a.target == target).cloned()
        }

        /// Make every `get` of `target` fail.
        pub fn fail_get(&self, target: &TargetRef) {
            self.inner.lock().failing_gets.insert(target.clone());
        }

        /// Make every `patch` of `target` fail.
        pub fn fail_patch(&self, target: &TargetRef) {
            self.inner.lock().failing_patches.insert(target.clone());
        }

        /// Make every `list` fail with `message`.
        pub fn fail_list(&self, message: &str) {
            self.inner.lock().list_error = Some(message.to_string());
        }

        pub fn gets(&self) -> Vec<TargetRef> {
            self.inner.lock().gets.clone()
        }

        /// Successfully applied patches, in order
        pub fn patches(&self) -> Vec<(TargetRef, Value)> {
            self.inner.lock().patches.clone()
        }

        pub fn lists(&self) -> Vec<ListCall> {
            self.inner.lock().lists.clone()
        }

        /// Queue phases returned by successive `phase` calls; the last one sticks.
        pub fn push_phases(&self, kind: WatchedKind, target: &TargetRef, phases: &[Option<&str>]) {
            self.inner
                .lock()
                .phases
                .entry((kind, target.clone()))
                .or_default()
                .extend(phases.iter().map(|p| p.map(str::to_string)));
        }
    }

    #[async_trait]
    impl ApplicationClient for FakeKubeClient {
        async fn get(&self, target: &TargetRef) -> Result<Application, ClientError> {
            let mut state = self.inner.lock();
            state.gets.push(target.clone());
            if state.failing_gets.contains(target) {
                return Err(ClientError::Api(format!("injected get failure for {target}")));
            }
            state
                .apps
                .iter()
                .find(|a| &a.target == target)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(target.to_string()))
        }

        async fn patch(&self, target: &TargetRef, patch: &Value) -> Result<(), ClientError> {
            let mut state = self.inner.lock();
            if state.failing_patches.contains(target) {
                return Err(ClientError::Api(format!("injected patch failure for {target}")));
            }
            let app = state
                .apps
                .iter_mut()
                .find(|a| &a.target == target)
                .ok_or_else(|| ClientError::NotFound(target.to_string()))?;

            let mut doc = json!({
                "metadata": { "annotations": app.annotations },
                "spec": { "syncPolicy": app.sync_policy },
            });
            merge_patch(&mut doc, patch);
            app.sync_policy = doc["spec"].get("syncPolicy").filter(|v| !v.is_null()).cloned();
            app.annotations = doc["metadata"]
                .get("annotations")
                .and_then(Value::as_object)
                .map(|m| {
                    m.iter()
                        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                        .collect()
                })
                .unwrap_or_default();

            state.patches.push((target.clone(), patch.clone()));
            Ok(())
        }

        async fn list(
            &self,
            namespace: Option<&str>,
            selector: Option<&str>,
        ) -> Result<Vec<Application>, ClientError> {
            let mut state = self.inner.lock();
            state.lists.push(ListCall {
                namespace: namespace.map(str::to_string),
                selector: selector.map(str::to_string),
            });
            if let Some(msg) = &state.list_error {
                return Err(ClientError::Api(msg.clone()));
            }
            Ok(state
                .apps
                .iter()
                .filter(|a| namespace.map_or(true, |ns| a.target.namespace == ns))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl StatusClient for FakeKubeClient {
        async fn phase(
            &self,
            kind: WatchedKind,
            target: &TargetRef,
        ) -> Result<Option<String>, ClientError> {
            let mut state = self.inner.lock();
            let queue = state
                .phases
                .get_mut(&(kind, target.clone()))
                .ok_or_else(|| ClientError::NotFound(format!("{kind} {target}")))?;
            if queue.len() > 1 {
                Ok(queue.pop_front().flatten())
            } else {
                Ok(queue.front().cloned().flatten())
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeKubeClient, ListCall};

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
