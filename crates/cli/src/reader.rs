//! Size-gated input file reading and tokenizing.
//!
//! Each input file is read whole (up to a size limit) and split on C
//! whitespace into candidate texts. Files above the limit are rejected with
//! an error for that file only.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a large input file (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Size-gated file reader.
#[derive(Debug, Clone)]
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with the default size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file and split it into candidate texts.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding the size limit.
    pub fn read_texts(&self, path: &Path) -> Result<Vec<String>> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let bytes = self.read_direct(path, size)?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(tokenize(&content))
    }

    fn read_direct(&self, path: &Path, size: u64) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(buffer)
    }
}

/// Split content into whitespace-delimited texts.
///
/// Separators are the C `isspace` set: space, `\t`, `\n`, `\v`, `\f` and
/// `\r`. Empty texts are never produced.
pub fn tokenize(content: &str) -> Vec<String> {
    content
        .split(is_separator)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

fn is_separator(c: char) -> bool {
    // `char::is_ascii_whitespace` leaves out vertical tab.
    c.is_ascii_whitespace() || c == '\x0b'
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
