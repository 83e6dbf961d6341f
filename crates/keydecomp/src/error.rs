//! Error types for the keydecomp library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for key discovery operations.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// The table has no columns, so no key can exist.
    #[error("Table has no columns")]
    EmptySchema,

    /// Two columns share a name, so the result would be ambiguous.
    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// A requested column is not present in the table.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// The table is wider than the configured column cap.
    #[error("Table has {count} columns, limit is {limit}")]
    TooManyColumns { count: usize, limit: usize },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for keydecomp operations.
pub type Result<T> = std::result::Result<T, KeyError>;
