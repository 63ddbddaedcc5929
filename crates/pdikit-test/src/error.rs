//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture grid
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: pdikit_core::Error,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Grid shapes differ
    #[error("grid comparison failed at index {index}: shape {expected:?} vs {actual:?}")]
    ShapeMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Grid samples differ
    #[error("grid comparison failed at index {index}: sample mismatch at ({row}, {col})")]
    GridMismatch { index: usize, row: u32, col: u32 },

    /// Byte string comparison failed
    #[error("string comparison failed at index {index}: sizes {len1} vs {len2}")]
    StringMismatch {
        index: usize,
        len1: usize,
        len2: usize,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
