//! Error types for fairbill operations.
//!
//! This module defines [`BillingError`], the error type returned by every
//! fallible operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed log lines are not errors; the parser rejects them quietly
//! - File access failures carry the offending path
//! - Use `anyhow::Error` (via `BillingError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fairbill operations.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The input log could not be opened.
    #[error("Failed to open input log {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the input log could not be read (including invalid UTF-8).
    #[error("Failed to read input log {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("Failed to write report to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fairbill operations.
pub type Result<T> = std::result::Result<T, BillingError>;
