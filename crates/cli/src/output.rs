// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::color;
use clap::ValueEnum;
use hs_engine::AppStatus;
use serde_json::{json, Value};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write the `argocd status` table. Columns are padded before coloring so
/// escape codes never skew alignment.
pub fn write_status_table(out: &mut impl Write, rows: &[AppStatus]) -> std::io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No applications found");
    }

    let names: Vec<String> = rows.iter().map(|r| r.target.to_string()).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0).max("APPLICATION".len());

    writeln!(
        out,
        "{}  {}  {}",
        color::header(&format!("{:<width$}", "APPLICATION")),
        color::header(&format!("{:<9}", "AUTO-SYNC")),
        color::header("PAUSED-BY"),
    )?;
    for (row, name) in rows.iter().zip(&names) {
        let state = if row.auto_sync { "enabled" } else { "disabled" };
        let paused_by = match &row.paused_by {
            Some(run_id) => run_id.clone(),
            None => color::muted("-"),
        };
        writeln!(
            out,
            "{name:<width$}  {}  {paused_by}",
            color::sync_state(&format!("{state:<9}"), row.auto_sync),
        )?;
    }
    Ok(())
}

pub fn status_json(rows: &[AppStatus]) -> Value {
    Value::Array(
        rows.iter()
            .map(|r| {
                json!({
                    "namespace": r.target.namespace,
                    "name": r.target.name,
                    "auto_sync": r.auto_sync,
                    "paused_by": r.paused_by,
                })
            })
            .collect(),
    )
}
