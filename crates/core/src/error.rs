//! Error types for Sentimetric operations.
//!
//! This module defines the main error type [`SentimetricError`] which represents
//! the failures that can surface from fetching pages and reading or writing
//! tables. Text analysis itself never fails: degenerate inputs produce the
//! all-zero [`MetricRecord`](crate::MetricRecord).
//!
//! # Example
//!
//! ```rust
//! use sentimetric_core::{SentimetricError, Result};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.is_empty() {
//!         return Err(SentimetricError::InvalidUrl("empty URL".to_string()));
//!     }
//!     Ok(url)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sentimetric operations.
///
/// The fetch-related variants are recovered inside
/// [`scrape_article`](crate::fetch::scrape_article) and never reach the batch
/// layer; the table variants are surfaced to callers.
#[derive(Error, Debug)]
pub enum SentimetricError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and body decoding problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or a failure while writing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input table lacks a required column.
    #[error("Input table is missing the required column '{0}'")]
    MissingColumn(String),
}

/// Result type alias for SentimetricError.
///
/// This is a convenience alias for `std::result::Result<T, SentimetricError>`.
pub type Result<T> = std::result::Result<T, SentimetricError>;
