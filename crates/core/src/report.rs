// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing progress output.
//!
//! The poller and the batch mutator describe what they are doing through a
//! [`Reporter`]; the lines they emit are part of the tool's observable
//! contract (operators and scripts grep for them).

use std::fmt;

/// Severity of a reported line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

/// Sink for operator-facing lines
pub trait Reporter: Clone + Send + Sync + 'static {
    fn report(&self, level: Level, line: &str);

    fn debug(&self, line: &str) {
        self.report(Level::Debug, line);
    }

    fn info(&self, line: &str) {
        self.report(Level::Info, line);
    }

    fn warn(&self, line: &str) {
        self.report(Level::Warn, line);
    }

    fn error(&self, line: &str) {
        self.report(Level::Error, line);
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{Level, Reporter};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recording reporter for tests
    #[derive(Clone, Default)]
    pub struct FakeReporter {
        lines: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl FakeReporter {
        pub fn new() -> Self {
            Self::default()
        }

        /// All recorded lines in emission order
        pub fn lines(&self) -> Vec<(Level, String)> {
            self.lines.lock().clone()
        }

        /// Recorded lines at `level`
        pub fn at(&self, level: Level) -> Vec<String> {
            self.lines.lock().iter().filter(|(l, _)| *l == level).map(|(_, s)| s.clone()).collect()
        }

        /// Lines starting with `prefix`, at any level
        pub fn starting_with(&self, prefix: &str) -> Vec<String> {
            self.lines
                .lock()
                .iter()
                .filter(|(_, s)| s.starts_with(prefix))
                .map(|(_, s)| s.clone())
                .collect()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines.lock().iter().any(|(_, s)| s.contains(needle))
        }
    }

    impl Reporter for FakeReporter {
        fn report(&self, level: Level, line: &str) {
            self.lines.lock().push((level, line.to_string()));
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeReporter;
