//! Error types for grid parsing, comparison and encoding.
//!
//! Every failure is fatal for the run; the command layer wraps these
//! with `anyhow` context and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    /// Row lengths differ within a single grid.
    #[error("malformed grid: line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The input has no rows, or its rows have no columns.
    #[error("malformed grid: {0}")]
    Empty(&'static str),

    /// Two grids do not share the same shape.
    #[error("dimension mismatch: {detail}")]
    DimensionMismatch { detail: String },

    #[error("unrecognized symbol {symbol:?} at line {line}, column {column}")]
    UnrecognizedSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    /// Pixel buffer does not match the declared image size.
    #[error("pixel buffer holds {found} bytes, {width}x{height} RGB needs {expected}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GridError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
