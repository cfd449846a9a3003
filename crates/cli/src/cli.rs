// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Horspool substring search over words made of letters (a-z, A-Z)
#[derive(Parser)]
#[command(name = "shiftscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SHIFTSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report the texts in each file that contain the pattern
    Scan(ScanArgs),
    /// Print the shift table for a pattern
    Table(TableArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Input files (default: [scan].files from the config)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Pattern to match (default: [scan].pattern from the config)
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print the shift table before the reports
    #[arg(long)]
    pub show_table: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Largest input file to read, in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

#[derive(clap::Args)]
pub struct TableArgs {
    /// Pattern to build the table for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
