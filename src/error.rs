//! Error types shared across the parse, render, and site stages.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure conditions the pipeline can surface.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The dataset source file is missing or unreadable.
    #[error("cannot open dataset source {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset source yielded no records at all.
    #[error("dataset source contains no records")]
    EmptySource,

    /// A record's field count disagrees with the header's.
    ///
    /// `line` is the 1-based source line where the record begins, or its
    /// row ordinal for tables assembled in memory.
    #[error("record {line} has {found} fields, expected {expected}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A configured column index does not exist in the table.
    #[error("column index {index} out of range for a table with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// Lower-level CSV failure: bad quoting, I/O mid-stream.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A page chrome or content fragment is missing or unreadable.
    #[error("cannot read page include {path:?}: {source}")]
    MissingInclude {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while writing site output.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// The site configuration file is not valid JSON.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a [`Error::SourceUnavailable`] from an open failure.
    pub fn source_unavailable(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a [`Error::MalformedRecord`] for a field-count mismatch.
    pub fn malformed_record(line: u64, expected: usize, found: usize) -> Self {
        Error::MalformedRecord {
            line,
            expected,
            found,
        }
    }

    /// Create a [`Error::ColumnOutOfRange`] for a bad projection index.
    pub fn column_out_of_range(index: usize, columns: usize) -> Self {
        Error::ColumnOutOfRange { index, columns }
    }

    /// Create a [`Error::MissingInclude`] from a fragment read failure.
    pub fn missing_include(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::MissingInclude {
            path: path.into(),
            source,
        }
    }

    /// Create a [`Error::Io`] with path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a [`Error::Config`] with a validation message.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
