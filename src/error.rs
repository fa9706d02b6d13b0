//! Custom error types for vetsplit
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for vetsplit operations
#[derive(Error, Debug)]
pub enum VetSplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV sheet encoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for new records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment attributed to someone who is not a contributor
    #[error("Invalid payer '{payer}': expected one of {}", allowed.join(", "))]
    InvalidPayer { payer: String, allowed: Vec<String> },

    /// Positional delete past the end of a collection
    #[error("No {collection} record at position {position} (collection has {len})")]
    PositionOutOfRange {
        collection: &'static str,
        position: usize,
        len: usize,
    },

    /// The workbook has no sheet with this name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The backing store could not be reached or opened
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl VetSplitError {
    /// Check if this is a validation error (including an invalid payer)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidPayer { .. })
    }

    /// Check if this error means the store itself could not be used
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::SheetNotFound(_))
    }
}

impl From<std::io::Error> for VetSplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VetSplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for VetSplitError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for vetsplit operations
pub type VetSplitResult<T> = Result<T, VetSplitError>;
