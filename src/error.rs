//! Error types for salestat
//!
//! This module defines the error types used throughout the salestat library.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use salestat::error::{Result, SalestatError};
//!
//! fn parse_year(s: &str) -> Result<i32> {
//!     s.parse()
//!         .map_err(|_| SalestatError::InvalidArgument(format!("invalid year: {s}")))
//! }
//!
//! assert!(parse_year("2023").is_ok());
//! assert!(parse_year("twenty").is_err());
//! ```

use thiserror::Error;

/// Main error type for salestat operations
///
/// This enum encompasses all possible errors that can occur during
/// salestat operations, from network failures to parsing and export issues.
#[derive(Error, Debug)]
pub enum SalestatError {
    /// Network or transport error while fetching from the sales API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error (includes malformed purchase-date text and
    /// records missing a required column)
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Unknown region name
    #[error("Unknown region: {0}")]
    InvalidRegion(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in salestat
///
/// # Example
///
/// ```
/// use salestat::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, SalestatError>;
