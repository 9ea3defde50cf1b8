//! Error handling for tankg
//!
//! Structural failures only: wrong buffer sizes, unreadable files and
//! conversions between unsupported formats. Field-level oddities in text
//! input are resolved by default substitution and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for tankg operations
pub type Result<T> = std::result::Result<T, TankgError>;

/// Main error type for tankg operations
#[derive(Error, Debug)]
pub enum TankgError {
    // Codec Errors
    #[error("Invalid TKG size: expected {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },

    #[error("Unrecognised text at line {line}: {content}")]
    TextFormat { line: usize, content: String },

    #[error("Invalid parameter {param}={value}, expected {expected}")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    #[error("Unknown parameter: {name}")]
    UnknownParam { name: String },

    // File Errors
    #[error("Unsupported conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("{failed} of {total} preset(s) failed to convert")]
    BatchFailed { failed: usize, total: usize },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization Errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TankgError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TankgError::Size { .. } => "SIZE_ERROR",
            TankgError::TextFormat { .. } => "TEXT_FORMAT_ERROR",
            TankgError::InvalidParameter { .. } => "INVALID_PARAMETER",
            TankgError::UnknownParam { .. } => "UNKNOWN_PARAM",
            TankgError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            TankgError::BatchFailed { .. } => "BATCH_FAILED",
            TankgError::FileNotFound { .. } => "FILE_NOT_FOUND",
            TankgError::FileReadError { .. } => "FILE_READ_ERROR",
            TankgError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            TankgError::Json(_) => "JSON_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            TankgError::Size { .. } => {
                Some("TKG presets are exactly 21 bytes; re-export the preset from the device.")
            }
            TankgError::TextFormat { .. } => {
                Some("Remove the offending line or convert without --strict.")
            }
            TankgError::InvalidParameter { .. } => {
                Some("Bring the value into the device range, or convert without --strict.")
            }
            TankgError::UnsupportedConversion { .. } => {
                Some("Convert between .tkg and .yaml/.yml only.")
            }
            TankgError::BatchFailed { .. } => {
                Some("Fix or remove the files listed as failed and run the conversion again.")
            }
            TankgError::FileNotFound { .. } => Some("Check the file path and try again."),
            _ => None,
        }
    }
}
