//! Grid comparison
//!
//! Similarity measures between two grids of the same shape.

use super::SampleGrid;
use crate::error::Result;

impl SampleGrid {
    /// Mean squared error between this grid and `other`.
    ///
    /// Computes `sum((other - self)^2) / (rows * cols)` over every sample.
    /// The result is not normalized to any range. Two empty grids of the
    /// same shape have an error of `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let a = SampleGrid::from_rows(&[&[0, 0], &[0, 0]]).unwrap();
    /// let b = SampleGrid::from_rows(&[&[2, 0], &[0, 2]]).unwrap();
    /// assert_eq!(a.mean_squared_error(&b).unwrap(), 2.0);
    /// ```
    pub fn mean_squared_error(&self, other: &SampleGrid) -> Result<f64> {
        self.check_same_shape(other)?;
        if self.is_empty() {
            return Ok(0.0);
        }

        let sum: u64 = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| {
                let d = i64::from(b) - i64::from(a);
                (d * d) as u64
            })
            .sum();

        Ok(sum as f64 / self.len() as f64)
    }
}
