//! Error types for pdikit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Numeric truncation and saturation are documented narrowing rules, not
//! errors, and never surface here.

use thiserror::Error;

/// pdikit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Operands with incompatible shapes
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        /// Shape of the reference operand as (rows, cols)
        expected: (u32, u32),
        /// Shape of the offending operand as (rows, cols)
        actual: (u32, u32),
    },

    /// Row, column or bit-plane index outside its valid range
    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error while dumping sample values
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
