//! Output formatting for scan results.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print the shift table before the reports.
    pub show_table: bool,
}

impl FormatOptions {
    /// Create options that include the shift table.
    pub fn with_table() -> Self {
        Self { show_table: true }
    }
}
