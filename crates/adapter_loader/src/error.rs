//! Data loading errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading sample points.
///
/// # Variants
/// - `FileIo`: The data file could not be opened or read
/// - `Io`: A stream failed mid-read
/// - `InvalidNumber`: A token is not a number
/// - `DanglingValue`: The input ended after an `x` with no matching `y`
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    FileIo {
        /// Path of the data file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading from the underlying stream failed.
    #[error("Read error: {0}")]
    Io(#[from] io::Error),

    /// A token could not be parsed as a number.
    #[error("Invalid number {token:?} on line {line}")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },

    /// Odd number of values: the last `x` has no `y`.
    #[error("Dangling value {token:?} on line {line}: x has no matching y")]
    DanglingValue {
        /// 1-based line number of the unmatched token
        line: usize,
        /// The unmatched token
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = LoadError::InvalidNumber {
            line: 3,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number \"abc\" on line 3");
    }

    #[test]
    fn test_dangling_value_display() {
        let err = LoadError::DanglingValue {
            line: 7,
            token: "2018".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("no matching y"));
    }

    #[test]
    fn test_file_io_display_includes_path() {
        let err = LoadError::FileIo {
            path: PathBuf::from("missing/data.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/data.txt"));
        assert!(msg.contains("not found"));
    }
}
