// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view of an Argo CD `Application`, decoded once at the client boundary.

use crate::ClientError;
use hs_core::{PriorState, TargetRef};
use kube::api::DynamicObject;
use serde_json::Value;
use std::collections::BTreeMap;

/// Annotation set on applications paused by hubswitch; value is the run id.
pub const PAUSED_BY_ANNOTATION: &str = "hubswitch.io/paused-by";

/// The parts of an Argo CD `Application` the pause/resume workflows use.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub target: TargetRef,
    /// `spec.syncPolicy`, `None` when absent or null
    pub sync_policy: Option<Value>,
    pub annotations: BTreeMap<String, String>,
}

impl Application {
    pub fn new(target: TargetRef, sync_policy: Option<Value>) -> Self {
        Self { target, sync_policy, annotations: BTreeMap::new() }
    }

    /// Whether Argo CD will reconcile this application on its own.
    pub fn auto_sync_enabled(&self) -> bool {
        self.sync_policy
            .as_ref()
            .and_then(|p| p.get("automated"))
            .is_some_and(|automated| !automated.is_null())
    }

    /// Run id of the pause that disabled this application, if any.
    pub fn paused_by(&self) -> Option<&str> {
        self.annotations.get(PAUSED_BY_ANNOTATION).map(String::as_str)
    }

    /// The sync policy as it should be stored for resume.
    pub fn prior_state(&self) -> PriorState {
        self.sync_policy.clone().unwrap_or(Value::Null)
    }

    pub(crate) fn from_dynamic(obj: DynamicObject) -> Result<Self, ClientError> {
        let name = obj
            .metadata
            .name
            .ok_or_else(|| ClientError::Decode("application without metadata.name".to_string()))?;
        let namespace = obj.metadata.namespace.ok_or_else(|| {
            ClientError::Decode(format!("application {name} without metadata.namespace"))
        })?;
        let sync_policy = obj
            .data
            .get("spec")
            .and_then(|spec| spec.get("syncPolicy"))
            .filter(|policy| !policy.is_null())
            .cloned();

        Ok(Self {
            target: TargetRef::new(namespace, name),
            sync_policy,
            annotations: obj.metadata.annotations.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod tests;
