// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use hs_core::{Level, Reporter};

/// Terminal reporter: info on stdout, warnings and errors on stderr.
///
/// Debug lines (poll progress) go to `tracing` so they only show up when the
/// subscriber is configured verbose.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, line: &str) {
        match level {
            Level::Debug => tracing::debug!("{line}"),
            Level::Info => println!("{line}"),
            Level::Warn | Level::Error => eprintln!("{line}"),
        }
    }
}
