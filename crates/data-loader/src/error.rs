//! Error types for the data-loader crate.
//!
//! Every failure here is a loader-side problem: a missing file, an unreadable
//! CSV row, or a field whose value cannot be turned into a typed record.
//! Once a `DataIndex` is built nothing in this crate can fail.

use thiserror::Error;

/// Errors that can occur while loading and parsing the MovieLens CSV files
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (bad quoting, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row in data file couldn't be parsed
    ///
    /// `line` is the 1-based line number reported by the CSV reader, header included
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
