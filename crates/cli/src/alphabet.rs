// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The 52-symbol alphabet accepted by the matcher.
//!
//! Symbols are indexed by range membership and offset within the range:
//! - `a..=z` -> `0..=25`
//! - `A..=Z` -> `26..=51`
//!
//! Everything else is rejected. The six punctuation bytes between `Z` and
//! `a` form a reserved gap and are reported separately from bytes outside
//! the combined range.

use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 52;

/// Number of symbols in each case range.
const RANGE_LEN: u8 = 26;

/// Human-readable description of the accepted symbols.
pub const ALLOWED_SYMBOLS: &str = "lower and uppercase letters (a-z, A-Z)";

/// A single alphabet symbol, stored as its index in `[0, 52)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

/// Why a byte is not an alphabet symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Below `A` or above `z`, including all non-ASCII bytes.
    OutOfRange,
    /// One of the punctuation bytes between `Z` and `a`.
    ReservedGap,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::OutOfRange => "out of range",
            Rejection::ReservedGap => "between the letter ranges",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First unsupported byte found in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// Byte offset of the offending byte.
    pub position: usize,
    /// The offending byte.
    pub byte: u8,
    /// Why it was rejected.
    pub rejection: Rejection,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.byte.is_ascii_graphic() {
            write!(
                f,
                "unsupported character '{}' at position {} ({})",
                self.byte as char, self.position, self.rejection
            )
        } else {
            write!(
                f,
                "unsupported byte 0x{:02x} at position {} ({})",
                self.byte, self.position, self.rejection
            )
        }
    }
}

impl Symbol {
    /// Classify a byte. Total over all `u8` values.
    pub fn from_byte(byte: u8) -> Result<Self, Rejection> {
        match byte {
            b'a'..=b'z' => Ok(Symbol(byte - b'a')),
            b'A'..=b'Z' => Ok(Symbol(RANGE_LEN + (byte - b'A'))),
            b'['..=b'`' => Err(Rejection::ReservedGap),
            _ => Err(Rejection::OutOfRange),
        }
    }

    /// Symbol at `index`, or `None` if `index >= ALPHABET_SIZE`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Symbol(index as u8))
        } else {
            None
        }
    }

    /// Index of this symbol in `[0, 52)`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The ASCII byte this symbol stands for.
    pub fn to_byte(self) -> u8 {
        if self.0 < RANGE_LEN {
            b'a' + self.0
        } else {
            b'A' + (self.0 - RANGE_LEN)
        }
    }

    pub fn as_char(self) -> char {
        self.to_byte() as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Rejection;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Symbol::from_byte(byte)
    }
}

/// All symbols in index order.
pub fn symbols() -> impl Iterator<Item = Symbol> {
    (0..ALPHABET_SIZE as u8).map(Symbol)
}

/// Check that every byte is an alphabet symbol.
pub fn validate(bytes: &[u8]) -> Result<(), InvalidSymbol> {
    match first_invalid(bytes) {
        Some(invalid) => Err(invalid),
        None => Ok(()),
    }
}

/// Convert bytes to symbols, failing on the first unsupported byte.
pub fn encode(bytes: &[u8]) -> Result<Vec<Symbol>, InvalidSymbol> {
    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            Symbol::from_byte(byte).map_err(|rejection| InvalidSymbol {
                position,
                byte,
                rejection,
            })
        })
        .collect()
}

fn first_invalid(bytes: &[u8]) -> Option<InvalidSymbol> {
    bytes.iter().enumerate().find_map(|(position, &byte)| {
        Symbol::from_byte(byte).err().map(|rejection| InvalidSymbol {
            position,
            byte,
            rejection,
        })
    })
}

#[cfg(test)]
#[path = "alphabet_tests.rs"]
mod tests;
