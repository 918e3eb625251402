//! Error types for ezdb
//!
//! Every failure is handed back to the caller unchanged. Nothing here is
//! retried or swallowed.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The main error type for ezdb operations
#[derive(Error, Debug)]
pub enum Error {
    // ========== Open Errors ==========
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open database at {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Database is closed")]
    Closed,

    // ========== Storage Errors ==========
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Data corruption detected: {0}")]
    DataCorruption(String),

    #[error("key does not exist: {0}")]
    KeyNotFound(String),

    // ========== Value Errors ==========
    #[error("Invalid integer value {value:?}: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid UTF-8 data: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    // ========== Scan Errors ==========
    #[error("Scan aborted: {0}")]
    Aborted(String),
}

/// Result type alias for ezdb operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if this error means the key holds no value
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }

    /// Returns true if this error indicates data corruption
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::DataCorruption(_))
    }
}
