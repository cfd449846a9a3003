// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn finds_config_in_current_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("shiftscan.toml");
    fs::write(&config_path, "version = 1\n").unwrap();

    assert_eq!(find_config(dir.path()), Some(config_path));
}

#[test]
fn finds_config_in_parent_dir() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("shiftscan.toml");
    fs::write(&config_path, "version = 1\n").unwrap();

    let subdir = dir.path().join("inputfiles");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), Some(config_path));
}

#[test]
fn stops_at_git_root() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    let subdir = dir.path().join("subdir");
    fs::create_dir(&subdir).unwrap();

    assert_eq!(find_config(&subdir), None);
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("custom.toml");

    let err = resolve_config(Some(&missing), dir.path()).unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn explicit_path_wins_over_discovery() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shiftscan.toml"), "version = 1\n").unwrap();
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "version = 1\n").unwrap();

    assert_eq!(
        resolve_config(Some(&custom), dir.path()).unwrap(),
        Some(custom)
    );
}

#[test]
fn falls_back_to_discovery() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    assert_eq!(resolve_config(None, dir.path()).unwrap(), None);
}

#[test]
fn explicit_directory_is_config_error() {
    let dir = tempdir().unwrap();

    let err = resolve_config(Some(dir.path()), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("config path is not a file"));
}

#[test]
fn directory_named_like_config_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shiftscan.toml"), "version = 1\n").unwrap();
    let inner = dir.path().join("inner");
    fs::create_dir_all(inner.join("shiftscan.toml")).unwrap();

    assert_eq!(
        find_config(&inner),
        Some(dir.path().join("shiftscan.toml"))
    );
}
