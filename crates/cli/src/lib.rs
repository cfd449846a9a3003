pub mod alphabet;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod runner;

pub use alphabet::{ALPHABET_SIZE, InvalidSymbol, Rejection, Symbol};
pub use cli::{Cli, Command, OutputFormat, ScanArgs, TableArgs};
pub use config::{Config, ScanConfig};
pub use error::{Error, ExitCode, Result};
pub use pattern::{
    Matcher, Pattern, PatternError, ShiftTable, build_shift_table, find, is_match,
};
pub use reader::{FileReader, tokenize};
pub use runner::{FileReport, Runner, ScanOutput};
