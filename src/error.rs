//! Error types for the neardupe library.
//!
//! All fallible operations return [`NearDupeError`]. Most variants describe
//! ordinary malformed input (bad encoding, mismatched label/value arity,
//! out-of-range coordinates); the public entry points contain those and hand
//! back an empty result instead. Only lifecycle failures such as
//! [`NearDupeError::ResourceLoad`] and [`NearDupeError::NotInitialized`]
//! reach the caller as errors.
//!
//! # Examples
//!
//! ```
//! use neardupe::error::{NearDupeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NearDupeError::analysis("unexpected token"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for neardupe operations.
#[derive(Error, Debug)]
pub enum NearDupeError {
    /// Input text was not well-formed (invalid UTF-8, embedded NUL, replacement characters).
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Labels and values had different lengths.
    #[error("Arity mismatch: {labels} labels but {values} values")]
    ArityMismatch { labels: usize, values: usize },

    /// No components (or an empty string) were supplied.
    #[error("Empty input")]
    EmptyInput,

    /// Linguistic resources could not be loaded.
    #[error("Resource load failure: {0}")]
    ResourceLoad(String),

    /// Latitude/longitude outside the valid range.
    #[error("Invalid coordinate: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Geohash precision of zero or beyond what the encoder supports.
    #[error("Invalid geohash precision: {0}")]
    InvalidPrecision(u32),

    /// The runtime has not been initialized, or has been shut down.
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors while reading resource files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with NearDupeError.
pub type Result<T> = std::result::Result<T, NearDupeError>;

impl NearDupeError {
    /// Create a new invalid encoding error.
    pub fn invalid_encoding<S: Into<String>>(msg: S) -> Self {
        NearDupeError::InvalidEncoding(msg.into())
    }

    /// Create a new resource load error.
    pub fn resource_load<S: Into<String>>(msg: S) -> Self {
        NearDupeError::ResourceLoad(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NearDupeError::Analysis(msg.into())
    }

    /// Create a new not-initialized error.
    pub fn not_initialized<S: Into<String>>(msg: S) -> Self {
        NearDupeError::NotInitialized(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NearDupeError::Other(msg.into())
    }

    /// Whether this error describes malformed caller input.
    ///
    /// Input errors are contained by the pipeline and turned into empty
    /// results; everything else is a lifecycle or resource problem.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NearDupeError::InvalidEncoding(_)
                | NearDupeError::ArityMismatch { .. }
                | NearDupeError::EmptyInput
                | NearDupeError::InvalidCoordinate { .. }
                | NearDupeError::InvalidPrecision(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NearDupeError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = NearDupeError::ArityMismatch {
            labels: 2,
            values: 3,
        };
        assert_eq!(error.to_string(), "Arity mismatch: 2 labels but 3 values");

        let error = NearDupeError::resource_load("missing en.json");
        assert_eq!(
            error.to_string(),
            "Resource load failure: missing en.json"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NearDupeError::from(io_error);

        match error {
            NearDupeError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_input_error_classification() {
        assert!(NearDupeError::EmptyInput.is_input_error());
        assert!(NearDupeError::invalid_encoding("nul byte").is_input_error());
        assert!(NearDupeError::InvalidCoordinate { lat: 91.0, lon: 0.0 }.is_input_error());
        assert!(!NearDupeError::not_initialized("shut down").is_input_error());
        assert!(!NearDupeError::resource_load("corrupt").is_input_error());
    }
}
