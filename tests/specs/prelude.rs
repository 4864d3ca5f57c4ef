// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent helpers for driving the binary.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Scratch environment: state dir and kubeconfig live in one temp dir.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the scratch root, creating parents.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// A kubeconfig naming `context` as current but defining no clusters.
    pub fn kubeconfig(&self, context: &str) -> PathBuf {
        self.file(
            "kubeconfig",
            &format!(
                "apiVersion: v1\nkind: Config\nclusters: []\ncontexts: []\nusers: []\ncurrent-context: {context}\n"
            ),
        )
    }

    pub fn hubswitch(&self) -> CliBuilder {
        let mut cmd = assert_cmd::Command::cargo_bin("hubswitch").unwrap();
        cmd.env_clear()
            .env("HS_STATE_DIR", self.path().join("state"))
            .env("KUBECONFIG", self.path().join("kubeconfig"))
            .env("NO_COLOR", "1");
        CliBuilder { cmd }
    }
}

/// `hubswitch` in a scratch environment that is gone before it runs; only
/// for invocations that never reach the filesystem.
pub fn cli() -> CliBuilder {
    Scratch::new().hubswitch()
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let run = RunAssert { output: self.cmd.output().unwrap() };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{stdout}");
        self
    }
}
