//! Error and warning types.
//!
//! Nothing the grid does in response to user input can fail. Errors only
//! come from loading input and from the checked `try_*` methods; everything
//! else degrades and records a [`GridWarning`].

use thiserror::Error;

use crate::width::WidthParseError;

/// Errors from loading input or checked operations.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column {index} out of range ({count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("column {0} cannot be resized")]
    NotResizable(usize),
}

/// A configuration problem the grid worked around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridWarning {
    /// Sticky columns must be `0, 1, .., k-1` of the visual order.
    #[error("sticky columns {requested:?} must start at 0 and be contiguous; using first {effective}")]
    NonContiguousSticky {
        requested: Vec<usize>,
        effective: usize,
    },

    /// A width value fell back to the next width source.
    #[error("column {column} width ignored: {source}")]
    UnparsableWidth {
        column: usize,
        source: WidthParseError,
    },

    /// Page size 0 was replaced with 1.
    #[error("page size must be positive; using 1")]
    ZeroPageSize,
}
