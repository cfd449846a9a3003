// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Horspool pattern matching over the letters-only alphabet.
//!
//! - [`Pattern`]: a validated, non-empty search pattern
//! - [`ShiftTable`]: bad-character shifts, built once per pattern
//! - [`scanner`]: the right-to-left sliding window scan
//! - [`Matcher`]: a pattern bundled with its shift table

pub mod matcher;
pub mod scanner;
pub mod shift_table;

use std::fmt;

use crate::alphabet::{self, ALLOWED_SYMBOLS, InvalidSymbol, Symbol};

pub use matcher::Matcher;
pub use scanner::{find, is_match};
pub use shift_table::{ShiftTable, build_shift_table};

/// Error during pattern validation.
///
/// Either variant aborts the whole run: every comparison uses the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error(
        "invalid pattern: pattern is empty. Acceptable characters are {}.",
        ALLOWED_SYMBOLS
    )]
    Empty,

    #[error(
        "invalid pattern \"{pattern}\": {invalid}. Acceptable characters are {}. Numbers and special characters are not supported.",
        ALLOWED_SYMBOLS
    )]
    InvalidSymbol {
        pattern: String,
        invalid: InvalidSymbol,
    },
}

/// A search pattern whose symbols all lie in the alphabet.
///
/// Length is always at least 1.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Validate `source` and build a pattern from it.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }
        let symbols =
            alphabet::encode(source.as_bytes()).map_err(|invalid| PatternError::InvalidSymbol {
                pattern: source.to_string(),
                invalid,
            })?;
        Ok(Self {
            source: source.to_string(),
            symbols,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Pattern length `m` (never zero).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed pattern.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
