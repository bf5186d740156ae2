use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a report run.
#[derive(Error, Debug)]
pub enum TrafficError {
    /// The input file could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created, written or moved into place.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet library rejected the workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single input line was rejected.
///
/// These never abort a run: the reader logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid line format: expected 4 fields, found {found}")]
    InvalidLineFormat { found: usize },

    #[error("invalid client name: {0}")]
    InvalidClientName(String),

    #[error("invalid traffic value: {0}")]
    InvalidTraffic(String),

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    /// Strict mode only.
    #[error("empty client id in {0}")]
    EmptyClientId(String),

    /// Strict mode only.
    #[error("period ends before it starts: {from} > {to}")]
    InvertedPeriod { from: String, to: String },
}

/// Convenience alias used throughout the traffic crates.
pub type Result<T> = std::result::Result<T, TrafficError>;
