// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Horspool scan: right-to-left comparison inside a sliding window.
//!
//! On mismatch the window advances by the shift of the text symbol aligned
//! with the pattern's last position, wherever the mismatch occurred.

use super::{Pattern, ShiftTable};
use crate::alphabet::{self, Symbol};

/// Start offset of the first occurrence of `pattern` in `text`.
///
/// Returns `None` when there is no occurrence or when `text` contains a
/// byte outside the alphabet. `table` must be built from `pattern`.
pub fn find(pattern: &Pattern, text: &[u8], table: &ShiftTable) -> Option<usize> {
    let text = match alphabet::encode(text) {
        Ok(symbols) => symbols,
        Err(invalid) => {
            tracing::trace!(%invalid, "text rejected");
            return None;
        }
    };
    scan(pattern.symbols(), &text, table)
}

/// Whether `pattern` occurs anywhere in `text`.
pub fn is_match(pattern: &Pattern, text: &[u8], table: &ShiftTable) -> bool {
    find(pattern, text, table).is_some()
}

fn scan(pattern: &[Symbol], text: &[Symbol], table: &ShiftTable) -> Option<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || m > n {
        return None;
    }

    // Index in `text` of the window's right end.
    let mut i = m - 1;
    while i < n {
        let mut k = 0;
        while k < m && pattern[m - 1 - k] == text[i - k] {
            k += 1;
        }
        if k == m {
            return Some(i + 1 - m);
        }
        i += table.shift(text[i]);
    }
    None
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
