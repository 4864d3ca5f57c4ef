// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable durations (`1h30m`, `10m`, `45s`).

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration: {0}")]
    Invalid(String),
    #[error("unknown duration unit '{unit}' in: {input}")]
    UnknownUnit { unit: char, input: String },
    #[error("duration must be > 0: {0}")]
    Zero(String),
}

/// Parse `1h30m`, `10m`, `45s` or a bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration, DurationParseError> {
    let mut total_secs: u64 = 0;
    let mut current_num = String::new();

    for c in s.trim().chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            let n: u64 =
                current_num.parse().map_err(|_| DurationParseError::Invalid(s.to_string()))?;
            current_num.clear();
            match c {
                'h' => total_secs += n * 3600,
                'm' => total_secs += n * 60,
                's' => total_secs += n,
                _ => {
                    return Err(DurationParseError::UnknownUnit { unit: c, input: s.to_string() })
                }
            }
        }
    }
    // Bare number → seconds
    if !current_num.is_empty() {
        let n: u64 =
            current_num.parse().map_err(|_| DurationParseError::Invalid(s.to_string()))?;
        total_secs += n;
    }
    if total_secs == 0 {
        return Err(DurationParseError::Zero(s.to_string()));
    }
    Ok(Duration::from_secs(total_secs))
}

/// Format whole seconds of `d` in the same notation `parse_duration` accepts.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    let mut out = String::new();
    if h > 0 {
        out.push_str(&format!("{h}h"));
    }
    if m > 0 {
        out.push_str(&format!("{m}m"));
    }
    if s > 0 {
        out.push_str(&format!("{s}s"));
    }
    out
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
