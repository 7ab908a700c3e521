//! Error types for the Sagitta library.
//!
//! All errors are represented by the [`SagittaError`] enum. Every failure in
//! this crate is synchronous and deterministic: it indicates a contract
//! violation by the caller, never a transient condition, so there are no
//! retry semantics.
//!
//! # Examples
//!
//! ```
//! use sagitta::error::{Result, SagittaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SagittaError::invalid_argument("top_k must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Sagitta operations.
#[derive(Error, Debug)]
pub enum SagittaError {
    /// A metadata filter value whose type the target filter language cannot
    /// express (anything other than string, integer, or float).
    #[error("unsupported filter value for key '{key}': {kind}")]
    UnsupportedFilterValue {
        /// Key of the offending metadata filter.
        key: String,
        /// Name of the value type encountered.
        kind: String,
    },

    /// A result set whose parallel id/score/document sequences disagree in
    /// length.
    #[error("malformed result set: {0}")]
    MalformedResultSet(String),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SagittaError.
pub type Result<T> = std::result::Result<T, SagittaError>;

impl SagittaError {
    /// Create a new unsupported-filter-value error.
    pub fn unsupported_filter_value<K: Into<String>, T: Into<String>>(key: K, kind: T) -> Self {
        SagittaError::UnsupportedFilterValue {
            key: key.into(),
            kind: kind.into(),
        }
    }

    /// Create a new malformed-result-set error.
    pub fn malformed_result_set<S: Into<String>>(msg: S) -> Self {
        SagittaError::MalformedResultSet(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SagittaError::InvalidArgument(msg.into())
    }
}
