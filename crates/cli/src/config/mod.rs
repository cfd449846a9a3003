// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles shiftscan.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;
use parse::{parse_scan_config, warn_unknown_key};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "shiftscan.toml";

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "scan"];

/// Raw config that keeps unknown keys for warnings.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Scan settings.
    pub scan: ScanConfig,
}

/// The `[scan]` table: what to search for and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Pattern to match against every text.
    pub pattern: Option<String>,

    /// Input files, relative to the config file's directory.
    pub files: Vec<PathBuf>,

    /// Print the shift table before the reports.
    pub show_table: bool,

    /// Largest input file to read, in bytes.
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            files: Vec::new(),
            show_table: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl ScanConfig {
    /// Configured files resolved against `base` (absolute paths kept as-is).
    pub fn files_relative_to(&self, base: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .map(|f| if f.is_absolute() { f.clone() } else { base.join(f) })
            .collect()
    }
}

/// Load config from a file, warning about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read {}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config content, warning about unknown keys.
///
/// Known keys holding a value of the wrong type are an error.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    Ok(Config {
        version,
        scan: parse_scan_config(flexible.scan.as_ref(), path)?,
    })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade shiftscan to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
