//! Error types for xvg reading.
//!
//! Every failure is fail-fast: the first error aborts the read and is
//! returned unchanged to the caller. Nothing here is logged. Line numbers
//! carried by errors are 1-based.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xvg operations.
pub type Result<T> = std::result::Result<T, XvgError>;

/// Errors that can occur while reading an xvg file.
#[derive(Error, Debug)]
pub enum XvgError {
    /// The file is missing or could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A series boundary (`&`) appeared inside the header region.
    #[error("series boundary on line {line} is not supported in the header region")]
    UnsupportedFormat { line: usize },

    /// The header scan reached end-of-file without seeing a data line.
    #[error("no data lines found in {}", .path.display())]
    NoDataFound { path: PathBuf },

    /// A requested variable does not exist (strict policy only).
    #[error("variable '{name}' was not found in the xvg file")]
    UnknownVariable { name: String },

    /// Multi-block data could not be reassembled into a rectangle.
    #[error("malformed block data: {reason}")]
    MalformedBlockData { reason: String },

    /// A column index points past the physical data columns.
    #[error("column index {index} is out of range for {columns} data columns")]
    IndexOutOfRange { index: usize, columns: usize },

    /// A data token is not a floating point number.
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    /// A data row has a different width than the first row.
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The file has fewer than two data columns.
    #[error("expected at least two data columns, found {found}")]
    TooFewColumns { found: usize },

    /// A read options file could not be parsed.
    #[error("invalid read options: {0}")]
    Config(String),
}

impl XvgError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        XvgError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        XvgError::MalformedBlockData {
            reason: reason.into(),
        }
    }
}
