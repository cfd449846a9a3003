// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file scan runner.
//!
//! Files are read and scanned in parallel using rayon, sharing one
//! [`Matcher`] read-only. A file that cannot be read produces an empty
//! report carrying the error message; the other files still run.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Error;
use crate::pattern::Matcher;
use crate::reader::FileReader;

/// Match report for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Input file as given.
    pub path: PathBuf,
    /// Number of candidate texts in the file.
    pub total_texts: usize,
    /// Texts containing the pattern, in file order.
    pub matches: Vec<String>,
    /// Why the file could not be read, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Report for a file whose texts were all scanned.
    pub fn scanned(path: impl Into<PathBuf>, total_texts: usize, matches: Vec<String>) -> Self {
        Self {
            path: path.into(),
            total_texts,
            matches,
            error: None,
        }
    }

    /// Empty report for a file that could not be read.
    pub fn unreadable(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            total_texts: 0,
            matches: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

/// Result of scanning every input file with one pattern.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutput {
    /// RFC 3339 time the scan finished.
    pub timestamp: String,
    pub pattern: String,
    pub files: Vec<FileReport>,
    pub total_texts: usize,
    pub total_matches: usize,
}

impl ScanOutput {
    pub fn new(timestamp: String, pattern: String, files: Vec<FileReport>) -> Self {
        let total_texts = files.iter().map(|f| f.total_texts).sum();
        let total_matches = files.iter().map(FileReport::match_count).sum();
        Self {
            timestamp,
            pattern,
            files,
            total_texts,
            total_matches,
        }
    }

    /// Whether any text in any file matched.
    pub fn has_matches(&self) -> bool {
        self.total_matches > 0
    }
}

/// Scans input files with a compiled pattern.
pub struct Runner {
    reader: FileReader,
}

impl Runner {
    pub fn new(reader: FileReader) -> Self {
        Self { reader }
    }

    /// Scan every file, returning reports in input order.
    pub fn run(&self, matcher: &Matcher, files: &[PathBuf]) -> Vec<FileReport> {
        files
            .par_iter()
            .map(|path| self.scan_file(matcher, path))
            .collect()
    }

    /// Scan a single file.
    pub fn scan_file(&self, matcher: &Matcher, path: &Path) -> FileReport {
        let texts = match self.reader.read_texts(path) {
            Ok(texts) => texts,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                return FileReport::unreadable(path, describe_read_error(path, &err));
            }
        };

        let matches: Vec<String> = matcher
            .filter(&texts)
            .into_iter()
            .map(String::from)
            .collect();

        tracing::debug!(
            path = %path.display(),
            texts = texts.len(),
            matches = matches.len(),
            "scanned file"
        );

        FileReport::scanned(path, texts.len(), matches)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(FileReader::new())
    }
}

fn describe_read_error(path: &Path, err: &Error) -> String {
    match err {
        Error::FileTooLarge { .. } => err.to_string(),
        _ => format!("Error opening file \"{}\"", path.display()),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
