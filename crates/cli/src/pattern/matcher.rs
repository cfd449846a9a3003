// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A compiled pattern: the validated pattern plus its shift table.

use super::{Pattern, PatternError, ShiftTable, scanner};

/// Pattern and shift table, built once and shared read-only across scans.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    table: ShiftTable,
}

impl Matcher {
    /// Build a matcher for an already-validated pattern.
    pub fn new(pattern: Pattern) -> Self {
        let table = ShiftTable::build(&pattern);
        Self { pattern, table }
    }

    /// Validate `source` and compile it.
    ///
    /// Fails on an empty pattern or any symbol outside the alphabet.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        Ok(Self::new(Pattern::new(source)?))
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn table(&self) -> &ShiftTable {
        &self.table
    }

    /// Whether the pattern occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        scanner::is_match(&self.pattern, text.as_bytes(), &self.table)
    }

    /// Start offset of the first occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<usize> {
        scanner::find(&self.pattern, text.as_bytes(), &self.table)
    }

    /// The texts containing the pattern, in input order.
    pub fn filter<'a, S>(&self, texts: &'a [S]) -> Vec<&'a str>
    where
        S: AsRef<str>,
    {
        texts
            .iter()
            .map(|text| text.as_ref())
            .filter(|text| self.is_match(text))
            .collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
