// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `hubswitch` binary.
//!
//! Everything here runs without a cluster: the kubeconfig points into a
//! scratch directory and only offline paths are exercised.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/cli"]
mod cli {
    mod help;
    mod usage;
}

#[path = "specs/argocd"]
mod argocd {
    mod resume;
}
