//! Error types for the Taranis dashboard core
//!
//! This module provides structured error definitions using thiserror.
//! The dashboard has no I/O or network surface at steady state, so the
//! taxonomy covers the latent data failures: empty collections, categorical
//! values outside their closed sets, and dangling record references.

use thiserror::Error;

/// Main error type for Taranis operations
#[derive(Error, Debug)]
pub enum TaranisError {
    /// A required record collection is empty
    #[error("No data available: {0}")]
    MissingData(&'static str),

    /// A categorical field value outside its closed enumeration
    #[error("Unknown {field} value: {value}")]
    UnknownEnumValue {
        /// Name of the enumerated field
        field: &'static str,
        /// The offending value
        value: String,
    },

    /// A cross-record reference that does not resolve
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Taranis operations
pub type Result<T> = std::result::Result<T, TaranisError>;
