//! Error types for the clf-eval library.

use thiserror::Error;

/// Result type for clf-eval operations.
pub type Result<T> = std::result::Result<T, ClfEvalError>;

/// Error types that can occur during classification evaluation.
#[derive(Error, Debug)]
pub enum ClfEvalError {
    /// Class label set was empty or contained duplicate names.
    #[error("Invalid class set: {0}")]
    InvalidClassSet(String),

    /// A class name not present in the configured label set.
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// A class index outside the configured range.
    #[error("Class index {index} out of range for {num_classes} classes")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of configured classes.
        num_classes: usize,
    },

    /// Malformed confusion matrix CSV text.
    #[error("Invalid matrix CSV: {0}")]
    InvalidMatrixCsv(String),
}
