// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State file persistence for pause/resume.
//!
//! A pause run writes its [`BatchRunRecord`] exactly once, after the batch has
//! finished. Writes go to a temporary sibling and are renamed into place, so
//! a reader never observes a half-written record. An existing record at the
//! same path is rotated into `.bak` first rather than overwritten.

use hs_core::BatchRunRecord;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur reading or writing a state file
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("state file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("state file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse state file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable read/write of a batch run record by path
pub trait StateStore: Clone + Send + Sync + 'static {
    fn write(&self, path: &Path, record: &BatchRunRecord) -> Result<(), StateFileError>;
    fn read(&self, path: &Path) -> Result<BatchRunRecord, StateFileError>;

    /// Most recent backup of the record at `path`, if one exists.
    fn latest_backup(&self, path: &Path) -> Option<PathBuf>;
}

/// Local filesystem state store
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStateStore;

impl FsStateStore {
    pub fn new() -> Self {
        Self
    }
}

impl StateStore for FsStateStore {
    fn write(&self, path: &Path, record: &BatchRunRecord) -> Result<(), StateFileError> {
        let io_err = |source| StateFileError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|source| StateFileError::Json { path: path.to_path_buf(), source })?;

        let tmp_path = with_suffix(path, ".tmp");
        fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;

        if path.exists() {
            let bak = rotate_bak_path(path);
            fs::rename(path, &bak).map_err(io_err)?;
            tracing::info!(path = %path.display(), bak = %bak.display(), "rotated previous state file");
        }
        fs::rename(&tmp_path, path).map_err(io_err)?;

        tracing::info!(
            path = %path.display(),
            run_id = %record.run_id,
            apps = record.apps.len(),
            "wrote state file"
        );
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<BatchRunRecord, StateFileError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StateFileError::NotFound(path.to_path_buf()))
            }
            Err(source) => return Err(StateFileError::Io { path: path.to_path_buf(), source }),
        };
        serde_json::from_str(&content)
            .map_err(|source| StateFileError::Json { path: path.to_path_buf(), source })
    }

    fn latest_backup(&self, path: &Path) -> Option<PathBuf> {
        let bak = with_suffix(path, ".bak");
        bak.exists().then_some(bak)
    }
}

/// `path` with `suffix` appended to the whole file name (`a.yaml` -> `a.yaml.bak`).
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

const MAX_BAK_FILES: u32 = 3;

/// Pick the next `.bak` / `.bak.N` path, rotating older backups out.
///
/// Keeps up to [`MAX_BAK_FILES`] backups: `.bak`, `.bak.2`, `.bak.3`.
/// The oldest backup is removed when the limit is reached.
pub fn rotate_bak_path(path: &Path) -> PathBuf {
    let bak = |n: u32| {
        if n == 1 {
            with_suffix(path, ".bak")
        } else {
            with_suffix(path, &format!(".bak.{n}"))
        }
    };

    // Remove the oldest if at capacity
    let oldest = bak(MAX_BAK_FILES);
    if oldest.exists() {
        let _ = fs::remove_file(&oldest);
    }

    // Shift existing backups up by one
    for n in (1..MAX_BAK_FILES).rev() {
        let src = bak(n);
        if src.exists() {
            let _ = fs::rename(&src, bak(n + 1));
        }
    }

    bak(1)
}

#[cfg(test)]
#[path = "state_file_tests.rs"]
mod tests;
