//! Error types for the classifier.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for classifier operations.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An input file is missing or unreadable.
    #[error("Error opening file: {}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus lacks one of the columns every row must carry.
    #[error("{}: missing required column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A corpus row could not be read as a labeled post.
    #[error("{}: malformed row {record}", path.display())]
    MalformedRow {
        path: PathBuf,
        record: u64,
        #[source]
        source: csv::Error,
    },

    /// Scoring was requested before any post was ingested.
    #[error("cannot classify with an untrained model")]
    UntrainedModel,

    /// A saved model was written by an incompatible version.
    #[error("model format version {found} is not supported (expected {expected})")]
    IncompatibleModel { found: u32, expected: u32 },

    /// Configuration values out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Model (de)serialization error.
    #[error("model encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    /// Configuration file parse error.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
