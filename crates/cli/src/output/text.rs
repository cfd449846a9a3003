//! Text output formatter.
//!
//! One block per input file:
//! ```text
//! --- Report for "<file>" ---
//! Pattern to match: "<pattern>"
//! Number of texts in file: <n>
//! Number of texts with occurrence of pattern in file: <k>
//!
//! Texts containing the pattern "<pattern>":
//! -> <text>
//! --- End of Report ---
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::pattern::{Pattern, ShiftTable};
use crate::runner::{FileReport, ScanOutput};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write the whole scan: optional shift table, one report per file, summary.
    pub fn write_output(
        &mut self,
        pattern: &Pattern,
        table: &ShiftTable,
        output: &ScanOutput,
    ) -> std::io::Result<()> {
        if self.options.show_table {
            self.write_table(pattern, table)?;
            writeln!(self.out)?;
        }
        for report in &output.files {
            self.write_report(&output.pattern, report)?;
        }
        self.write_summary(output)
    }

    /// Write the shift table: the default shift, then every override.
    pub fn write_table(&mut self, pattern: &Pattern, table: &ShiftTable) -> std::io::Result<()> {
        write!(self.out, "Shift table for pattern \"")?;
        self.colored(&scheme::pattern(), pattern.as_str())?;
        writeln!(self.out, "\" (default shift {}):", table.default_shift())?;
        for entry in table.overrides() {
            write!(self.out, "  {} -> ", entry.symbol)?;
            self.colored(&scheme::count(), &entry.shift.to_string())?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write the report block for one file.
    pub fn write_report(&mut self, pattern: &str, report: &FileReport) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(self.out, "--- Report for \"")?;
        self.out.set_color(scheme::path().set_bold(true))?;
        write!(self.out, "{}", report.path.display())?;
        self.out.set_color(&scheme::header())?;
        write!(self.out, "\" ---")?;
        self.out.reset()?;
        writeln!(self.out)?;

        if let Some(ref error) = report.error {
            self.colored(&scheme::error(), error)?;
            writeln!(self.out)?;
        }

        write!(self.out, "Pattern to match: \"")?;
        self.colored(&scheme::pattern(), pattern)?;
        writeln!(self.out, "\"")?;

        write!(self.out, "Number of texts in file: ")?;
        self.colored(&scheme::count(), &report.total_texts.to_string())?;
        writeln!(self.out)?;

        write!(
            self.out,
            "Number of texts with occurrence of pattern in file: "
        )?;
        self.colored(&scheme::count(), &report.match_count().to_string())?;
        writeln!(self.out)?;
        writeln!(self.out)?;

        write!(self.out, "Texts containing the pattern \"")?;
        self.colored(&scheme::pattern(), pattern)?;
        writeln!(self.out, "\":")?;
        for text in &report.matches {
            write!(self.out, "-> ")?;
            self.colored(&scheme::matched(), text)?;
            writeln!(self.out)?;
        }

        self.colored(&scheme::header(), "--- End of Report ---")?;
        writeln!(self.out)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Write the closing summary line.
    pub fn write_summary(&mut self, output: &ScanOutput) -> std::io::Result<()> {
        let files = output.files.len();
        writeln!(
            self.out,
            "{} file{} scanned, {} of {} text{} matched",
            files,
            if files == 1 { "" } else { "s" },
            output.total_matches,
            output.total_texts,
            if output.total_texts == 1 { "" } else { "s" },
        )
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, spec: &termcolor::ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
