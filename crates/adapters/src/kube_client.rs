// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes-backed clients using `kube-rs` dynamic objects.
//!
//! Argo CD and the cluster backup operator ship CRDs we do not generate
//! types for, so every call goes through [`DynamicObject`] and is decoded
//! into a typed view before leaving this module.

use crate::{Application, ApplicationClient, ClientError, StatusClient, WatchedKind};
use async_trait::async_trait;
use hs_core::TargetRef;
use kube::api::{Api, ApiResource, DynamicObject, GroupVersionKind, ListParams, Patch, PatchParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use serde_json::Value;
use std::time::Duration;

/// Context name reported when running inside a pod without a kubeconfig.
pub const IN_CLUSTER_CONTEXT: &str = "in-cluster";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Client bound to one kube context
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
    context: String,
}

impl KubeClient {
    /// Connect using the kubeconfig (`KUBECONFIG` or `~/.kube/config`).
    ///
    /// `context` selects a named context; otherwise the kubeconfig's
    /// current-context is used. Without a kubeconfig the in-cluster service
    /// account is used, which only works when no context was requested.
    pub async fn connect(context: Option<&str>) -> Result<Self, ClientError> {
        let (mut config, context) = match Kubeconfig::read() {
            Ok(kubeconfig) => {
                let name = pick_context(context, &kubeconfig)?;
                let options =
                    KubeConfigOptions { context: Some(name.clone()), ..Default::default() };
                let config = Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .map_err(|e| ClientError::Config(e.to_string()))?;
                (config, name)
            }
            Err(e) => {
                if let Some(name) = context {
                    return Err(no_kubeconfig(name, e));
                }
                let config = Config::incluster().map_err(|e| ClientError::Config(e.to_string()))?;
                (config, IN_CLUSTER_CONTEXT.to_string())
            }
        };
        config.connect_timeout = Some(CONNECT_TIMEOUT);
        config.read_timeout = Some(READ_TIMEOUT);

        let client = Client::try_from(config).map_err(|e| ClientError::Config(e.to_string()))?;
        tracing::debug!(%context, "connected kube client");
        Ok(Self { client, context })
    }

    /// Name the context [`connect`](Self::connect) would use, without
    /// contacting the cluster.
    pub fn resolve_context(context: Option<&str>) -> Result<String, ClientError> {
        match Kubeconfig::read() {
            Ok(kubeconfig) => pick_context(context, &kubeconfig),
            Err(e) => match context {
                Some(name) => Err(no_kubeconfig(name, e)),
                None => Ok(IN_CLUSTER_CONTEXT.to_string()),
            },
        }
    }

    /// The kube context this client talks to.
    pub fn context(&self) -> &str {
        &self.context
    }

    fn applications(&self, namespace: Option<&str>) -> Api<DynamicObject> {
        let ar = ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk("argoproj.io", "v1alpha1", "Application"),
            "applications",
        );
        match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &ar),
            None => Api::all_with(self.client.clone(), &ar),
        }
    }

    fn watched(&self, kind: WatchedKind, namespace: &str) -> Api<DynamicObject> {
        let ar = ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(kind.group(), kind.version(), kind.kind()),
            kind.plural(),
        );
        Api::namespaced_with(self.client.clone(), namespace, &ar)
    }
}

fn pick_context(context: Option<&str>, kubeconfig: &Kubeconfig) -> Result<String, ClientError> {
    context.map(str::to_string).or_else(|| kubeconfig.current_context.clone()).ok_or_else(|| {
        ClientError::Config("kubeconfig has no current-context; pass --context".to_string())
    })
}

fn no_kubeconfig(context: &str, err: impl std::fmt::Display) -> ClientError {
    ClientError::Config(format!("context {context} requested but no kubeconfig could be read: {err}"))
}

fn map_err(what: &str, err: kube::Error) -> ClientError {
    match err {
        kube::Error::Api(ref resp) if resp.code == 404 => ClientError::NotFound(what.to_string()),
        other => ClientError::Api(other.to_string()),
    }
}

#[async_trait]
impl ApplicationClient for KubeClient {
    async fn get(&self, target: &TargetRef) -> Result<Application, ClientError> {
        let obj = self
            .applications(Some(&target.namespace))
            .get(&target.name)
            .await
            .map_err(|e| map_err(&target.to_string(), e))?;
        Application::from_dynamic(obj)
    }

    async fn patch(&self, target: &TargetRef, merge_patch: &Value) -> Result<(), ClientError> {
        self.applications(Some(&target.namespace))
            .patch(&target.name, &PatchParams::default(), &Patch::Merge(merge_patch))
            .await
            .map_err(|e| map_err(&target.to_string(), e))?;
        tracing::debug!(app = %target, "patched application");
        Ok(())
    }

    async fn list(
        &self,
        namespace: Option<&str>,
        selector: Option<&str>,
    ) -> Result<Vec<Application>, ClientError> {
        let mut lp = ListParams::default();
        if let Some(selector) = selector {
            lp = lp.labels(selector);
        }
        let list = self
            .applications(namespace)
            .list(&lp)
            .await
            .map_err(|e| map_err("applications", e))?;
        list.items.into_iter().map(Application::from_dynamic).collect()
    }
}

#[async_trait]
impl StatusClient for KubeClient {
    async fn phase(
        &self,
        kind: WatchedKind,
        target: &TargetRef,
    ) -> Result<Option<String>, ClientError> {
        let obj = self
            .watched(kind, &target.namespace)
            .get(&target.name)
            .await
            .map_err(|e| map_err(&format!("{kind} {target}"), e))?;
        Ok(obj
            .data
            .get("status")
            .and_then(|status| status.get("phase"))
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
