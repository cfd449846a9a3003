// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::path::PathBuf;

use shiftscan::cli::{Cli, OutputFormat, ScanArgs};
use shiftscan::color::resolve_color;
use shiftscan::config::{self, Config};
use shiftscan::discovery;
use shiftscan::error::{Error, ExitCode};
use shiftscan::output::FormatOptions;
use shiftscan::output::json::{self, JsonFormatter, TableOutput};
use shiftscan::output::text::TextFormatter;
use shiftscan::pattern::Matcher;
use shiftscan::reader::FileReader;
use shiftscan::runner::Runner;

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let source = args
        .pattern
        .clone()
        .or_else(|| config.scan.pattern.clone())
        .ok_or_else(|| {
            Error::Argument(
                "no pattern given; pass --pattern or set [scan].pattern in shiftscan.toml"
                    .to_string(),
            )
        })?;

    // An invalid pattern aborts before any file is opened.
    let matcher = Matcher::compile(&source).map_err(Error::from)?;

    let files: Vec<PathBuf> = if args.files.is_empty() {
        let base = config_path
            .as_deref()
            .and_then(|p| p.parent())
            .unwrap_or(&cwd);
        config.scan.files_relative_to(base)
    } else {
        args.files.clone()
    };
    if files.is_empty() {
        return Err(Error::Argument(
            "no input files; pass FILE arguments or set [scan].files in shiftscan.toml"
                .to_string(),
        )
        .into());
    }

    let max_file_size = args.max_file_size.unwrap_or(config.scan.max_file_size);
    let show_table = args.show_table || config.scan.show_table;

    tracing::debug!(
        pattern = %matcher.pattern(),
        files = files.len(),
        max_file_size,
        "starting scan"
    );

    let runner = Runner::new(FileReader::with_max_size(max_file_size));
    let reports = runner.run(&matcher, &files);
    let output = json::create_output(matcher.pattern(), reports);

    match args.output {
        OutputFormat::Text => {
            let options = if show_table {
                FormatOptions::with_table()
            } else {
                FormatOptions::default()
            };
            let mut formatter = TextFormatter::stdout(resolve_color(args.no_color), options);
            formatter.write_output(matcher.pattern(), matcher.table(), &output)?;
        }
        OutputFormat::Json => {
            let table = show_table.then(|| TableOutput::new(matcher.pattern(), matcher.table()));
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_with_table(&output, table)?;
        }
    }

    Ok(if output.has_matches() {
        ExitCode::Success
    } else {
        ExitCode::NoMatches
    })
}
