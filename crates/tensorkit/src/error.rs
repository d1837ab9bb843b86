//! Error types.
//!
//! Only the fallible `from_vec`-style constructors return errors. Every
//! other precondition (index bounds, operand shape agreement, matrix
//! invertibility) is a contract between the caller and the library, and a
//! violation is reported by a panicking assertion rather than a
//! recoverable error.

use thiserror::Error;

/// Errors that can occur when constructing a container from raw data.
#[derive(Debug, Error)]
pub enum AlgebraError {
    /// Data length does not match the declared shape.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
