// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of a resource taken immediately before it was mutated.
///
/// Stored verbatim and re-applied on resume; never interpreted here.
pub type PriorState = serde_json::Value;

/// Errors from parsing a `namespace/name` reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("expected <namespace>/<name>, got '{0}'")]
    Malformed(String),
}

/// One mutable, namespaced resource.
///
/// Displays and parses as `namespace/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetRef {
    pub namespace: String,
    pub name: String,
}

impl TargetRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), name: name.into() }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for TargetRef {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((ns, name)) if !ns.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(TargetRef::new(ns, name))
            }
            _ => Err(TargetParseError::Malformed(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
