// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating and parsing a Noise vs. Exposure report.
#[derive(Debug, Error)]
pub enum NoiseReportError {
    #[error("measurement file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed filename '{name}': expected 6 '_'-separated tokens, found {found}")]
    MalformedFilename { name: String, found: usize },

    #[error("malformed header line '{line}': {reason}")]
    MalformedHeader { line: String, reason: String },

    #[error("malformed table at line {line}: {reason}")]
    MalformedTable { line: usize, reason: String },

    #[error("dataset index {index} out of range (catalog holds {len} entries)")]
    DatasetIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, NoiseReportError>;

// src/error.rs
