//! Config file discovery.
//!
//! An explicit `-C`/`SHIFTSCAN_CONFIG` path wins. Otherwise the nearest
//! shiftscan.toml between the working directory and the enclosing git root
//! is used, if any.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Nearest shiftscan.toml in `start_dir` or its ancestors.
///
/// The search stops after the first directory containing `.git`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config file to load, if any.
///
/// An explicit path must name an existing regular file.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };

    let problem = if !path.exists() {
        "config file not found"
    } else if !path.is_file() {
        "config path is not a file"
    } else {
        return Ok(Some(path.to_path_buf()));
    };

    Err(Error::Config {
        message: format!("{}: {}", problem, path.display()),
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
