// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hs-core: Core library for the hubswitch switchover toolkit

pub mod batch;
pub mod poll;
pub mod records;
pub mod report;
pub mod target;
pub mod time_fmt;

pub use batch::{Accepted, AttemptStatus, Batch, BatchResult, Failed, MutationError};
pub use poll::{PollConfig, Poller, DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT};
pub use records::{BatchRunRecord, PausedApp};
#[cfg(any(test, feature = "test-support"))]
pub use report::FakeReporter;
pub use report::{Level, Reporter};
pub use target::{PriorState, TargetParseError, TargetRef};
pub use time_fmt::{format_duration, parse_duration, DurationParseError};
