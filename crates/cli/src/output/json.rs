// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::pattern::{Pattern, ShiftTable};
use crate::pattern::shift_table::ShiftEntry;
use crate::runner::{FileReport, ScanOutput};

/// Shift table for JSON output.
#[derive(Debug, Serialize)]
pub struct TableOutput<'a> {
    pub pattern: &'a str,
    pub default_shift: usize,
    pub overrides: Vec<ShiftEntry>,
    /// All 52 shifts in alphabet index order (a-z, then A-Z).
    pub shifts: &'a [usize],
}

impl<'a> TableOutput<'a> {
    pub fn new(pattern: &'a Pattern, table: &'a ShiftTable) -> Self {
        Self {
            pattern: pattern.as_str(),
            default_shift: table.default_shift(),
            overrides: table.overrides(),
            shifts: table.as_slice(),
        }
    }
}

/// Scan output with an optional shift table.
#[derive(Debug, Serialize)]
struct CombinedOutput<'a> {
    timestamp: &'a str,
    pattern: &'a str,
    matched: bool,
    total_texts: usize,
    total_matches: usize,
    files: &'a [FileReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<TableOutput<'a>>,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete scan output.
    pub fn write(&mut self, output: &ScanOutput) -> std::io::Result<()> {
        self.write_with_table(output, None)
    }

    /// Write scan output, embedding the shift table when given.
    pub fn write_with_table(
        &mut self,
        output: &ScanOutput,
        table: Option<TableOutput<'_>>,
    ) -> std::io::Result<()> {
        let combined = CombinedOutput {
            timestamp: &output.timestamp,
            pattern: &output.pattern,
            matched: output.has_matches(),
            total_texts: output.total_texts,
            total_matches: output.total_matches,
            files: &output.files,
            table,
        };
        let json = serde_json::to_string_pretty(&combined).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write a shift table on its own.
    pub fn write_table(&mut self, table: &TableOutput<'_>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(table).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Create ScanOutput with current timestamp.
pub fn create_output(pattern: &Pattern, files: Vec<FileReport>) -> ScanOutput {
    ScanOutput::new(
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        pattern.as_str().to_string(),
        files,
    )
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
