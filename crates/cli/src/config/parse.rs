// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::{Path, PathBuf};

use toml::value::Table;

use super::ScanConfig;
use crate::error::{Error, Result};

/// Known keys in the `[scan]` table.
const KNOWN_SCAN_KEYS: &[&str] = &["pattern", "files", "show_table", "max_file_size"];

/// Error for a known key holding the wrong kind of value.
fn invalid_value(path: &Path, key: &str, expected: &str) -> Error {
    Error::Config {
        message: format!("{}: `scan.{}` must be {}", path.display(), key, expected),
        path: Some(path.to_path_buf()),
    }
}

/// Parse an optional TOML string.
fn parse_string(table: &Table, key: &str, path: &Path) -> Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| invalid_value(path, key, "a string")),
    }
}

/// Parse an optional TOML array of strings.
fn parse_string_array(table: &Table, key: &str, path: &Path) -> Result<Option<Vec<String>>> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let expected = || invalid_value(path, key, "an array of strings");
    value
        .as_array()
        .ok_or_else(expected)?
        .iter()
        .map(|v| v.as_str().map(String::from).ok_or_else(expected))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Parse an optional TOML boolean.
fn parse_bool(table: &Table, key: &str, path: &Path) -> Result<Option<bool>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| invalid_value(path, key, "a boolean")),
    }
}

/// Parse an optional non-negative TOML integer.
fn parse_u64(table: &Table, key: &str, path: &Path) -> Result<Option<u64>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_integer()
            .and_then(|v| u64::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| invalid_value(path, key, "a non-negative integer")),
    }
}

/// Parse the `[scan]` table, warning about unknown fields.
pub(super) fn parse_scan_config(value: Option<&toml::Value>, path: &Path) -> Result<ScanConfig> {
    let t = match value {
        None => return Ok(ScanConfig::default()),
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            return Err(Error::Config {
                message: format!("{}: `scan` must be a table", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
    };

    for key in t.keys() {
        if !KNOWN_SCAN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("scan.{}", key));
        }
    }

    let defaults = ScanConfig::default();
    Ok(ScanConfig {
        pattern: parse_string(t, "pattern", path)?,
        files: parse_string_array(t, "files", path)?
            .unwrap_or_default()
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        show_table: parse_bool(t, "show_table", path)?.unwrap_or(defaults.show_table),
        max_file_size: parse_u64(t, "max_file_size", path)?.unwrap_or(defaults.max_file_size),
    })
}

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "shiftscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
