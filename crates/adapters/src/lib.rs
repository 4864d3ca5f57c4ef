// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the cluster API and operator output.

mod application;
mod client;
mod console;
mod kube_client;
mod status;

pub use application::{Application, PAUSED_BY_ANNOTATION};
#[cfg(any(test, feature = "test-support"))]
pub use client::{merge_patch, FakeKubeClient, ListCall};
pub use client::{ApplicationClient, ClientError, StatusClient};
pub use console::ConsoleReporter;
pub use kube_client::{KubeClient, IN_CLUSTER_CONTEXT};
pub use status::WatchedKind;
