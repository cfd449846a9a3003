//! Table command implementation.

use shiftscan::cli::{OutputFormat, TableArgs};
use shiftscan::color::resolve_color;
use shiftscan::error::{Error, ExitCode};
use shiftscan::output::FormatOptions;
use shiftscan::output::json::{JsonFormatter, TableOutput};
use shiftscan::output::text::TextFormatter;
use shiftscan::pattern::Matcher;

/// Run the table command.
pub fn run(args: &TableArgs) -> anyhow::Result<ExitCode> {
    let matcher = Matcher::compile(&args.pattern).map_err(Error::from)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(resolve_color(args.no_color), FormatOptions::default());
            formatter.write_table(matcher.pattern(), matcher.table())?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write_table(&TableOutput::new(matcher.pattern(), matcher.table()))?;
        }
    }

    Ok(ExitCode::Success)
}
