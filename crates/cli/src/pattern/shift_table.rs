// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bad-character shift table.

use std::fmt;

use serde::Serialize;

use super::Pattern;
use crate::alphabet::{ALPHABET_SIZE, Symbol, symbols};

/// Skip distance per alphabet symbol for one pattern.
///
/// Every entry starts at `m`. Symbols at positions `0..m-1` are then
/// overwritten with `m - 1 - j`, left to right, so each ends up keyed to its
/// rightmost occurrence before the final position. All entries lie in `[1, m]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    shifts: [usize; ALPHABET_SIZE],
    pattern_len: usize,
}

/// One overridden table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftEntry {
    pub symbol: char,
    pub shift: usize,
}

impl ShiftTable {
    /// Build the table for `pattern`.
    pub fn build(pattern: &Pattern) -> Self {
        let m = pattern.len();
        let mut shifts = [m; ALPHABET_SIZE];

        // The final symbol never sets its own entry.
        for (j, symbol) in pattern.symbols().iter().enumerate().take(m - 1) {
            shifts[symbol.index()] = m - 1 - j;
        }

        tracing::debug!(pattern = %pattern, "built shift table");

        Self {
            shifts,
            pattern_len: m,
        }
    }

    /// Skip distance for `symbol`.
    pub fn shift(&self, symbol: Symbol) -> usize {
        self.shifts[symbol.index()]
    }

    /// Shift used for symbols absent from the first `m - 1` positions.
    pub fn default_shift(&self) -> usize {
        self.pattern_len
    }

    /// All entries in alphabet index order.
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        symbols().map(|s| (s, self.shift(s)))
    }

    /// Entries that differ from the default shift.
    pub fn overrides(&self) -> Vec<ShiftEntry> {
        self.entries()
            .filter(|&(_, shift)| shift != self.pattern_len)
            .map(|(symbol, shift)| ShiftEntry {
                symbol: symbol.as_char(),
                shift,
            })
            .collect()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shifts
    }
}

/// Space-separated shifts in alphabet index order.
impl fmt::Display for ShiftTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, shift) in self.shifts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{shift}")?;
        }
        Ok(())
    }
}

/// Build a shift table for an already-validated pattern.
pub fn build_shift_table(pattern: &Pattern) -> ShiftTable {
    ShiftTable::build(pattern)
}

#[cfg(test)]
#[path = "shift_table_tests.rs"]
mod tests;
