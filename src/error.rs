//! Error types for vectorizer operations.
//!
//! This module defines the error conditions raised by the generic engine,
//! allowing callers to handle failures instead of panicking. Size mismatches
//! between two statically-sized containers never reach this type: they are
//! rejected at compile time.

use thiserror::Error;

/// Errors that can occur during vectorizer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorizerError {
    /// Two vectorized operands do not report the same number of elements.
    #[error("Length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch {
        /// Size of the receiving container.
        expected: usize,
        /// Size of the offending operand.
        found: usize,
    },
    /// Checked access outside of `[0, size)`.
    #[error("Index out of range: {index} (size: {size})")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The size of the container.
        size: usize,
    },
    /// Mathematical domain error (invalid logarithm, degenerate norm, ...).
    #[error("Domain error: {message}")]
    Domain {
        /// Human-readable error message.
        message: String,
    },
    /// A masked aggregate selected no element at all.
    #[error("Empty selection: {operation} requires at least one selected element")]
    EmptySelection {
        /// Name of the aggregate that failed.
        operation: &'static str,
    },
    /// A resize request that does not match the fixed size of the container.
    #[error("Unsupported resize: {operation} to {requested} on a container of fixed size {size}")]
    UnsupportedResize {
        /// Name of the request (`resize`, `reserve`, `clear`).
        operation: &'static str,
        /// Requested size.
        requested: usize,
        /// Fixed size of the container.
        size: usize,
    },
    /// Text could not be read back into a container.
    #[error("Parse error: {message}")]
    Parse {
        /// Human-readable error message.
        message: String,
    },
}

/// Result type alias for vectorizer operations.
pub type Result<T> = std::result::Result<T, VectorizerError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, found: usize) -> VectorizerError {
    VectorizerError::LengthMismatch { expected, found }
}

/// Creates an out-of-range error.
pub fn out_of_range(index: usize, size: usize) -> VectorizerError {
    VectorizerError::OutOfRange { index, size }
}

/// Creates a domain error.
pub fn domain_error(message: impl Into<String>) -> VectorizerError {
    VectorizerError::Domain {
        message: message.into(),
    }
}

/// Creates an empty selection error.
pub fn empty_selection(operation: &'static str) -> VectorizerError {
    VectorizerError::EmptySelection { operation }
}

/// Creates an unsupported resize error.
pub fn unsupported_resize(operation: &'static str, requested: usize, size: usize) -> VectorizerError {
    VectorizerError::UnsupportedResize {
        operation,
        requested,
        size,
    }
}

/// Creates a parse error.
pub fn parse_error(message: impl Into<String>) -> VectorizerError {
    VectorizerError::Parse {
        message: message.into(),
    }
}
