//! Grid arithmetic
//!
//! Sample-wise addition of two grids of the same shape. The narrowing rule
//! is always explicit, because different callers need different overflow
//! behavior: bit-plane accumulation saturates, reference pipelines that
//! emulate 8-bit wraparound truncate.

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};
use crate::narrow::Narrowing;

impl SampleGrid {
    /// Add another grid to this one: self + other.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::{Narrowing, SampleGrid};
    ///
    /// let a = SampleGrid::filled(1, 2, 200).unwrap();
    /// let b = SampleGrid::filled(1, 2, 100).unwrap();
    /// assert_eq!(a.add(&b, Narrowing::Saturate).unwrap().data(), &[255, 255]);
    /// assert_eq!(a.add(&b, Narrowing::Truncate).unwrap().data(), &[44, 44]);
    /// ```
    pub fn add(&self, other: &SampleGrid, narrowing: Narrowing) -> Result<SampleGrid> {
        self.check_same_shape(other)?;
        let mut out = self.to_mut();
        out.add_inplace(other, narrowing)?;
        Ok(out.into())
    }
}

impl SampleGridMut {
    /// Add another grid in place: self += other.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    pub fn add_inplace(&mut self, other: &SampleGrid, narrowing: Narrowing) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        for (d, &s) in self.data_mut().iter_mut().zip(other.data()) {
            *d = match narrowing {
                Narrowing::Saturate => d.saturating_add(s),
                Narrowing::Truncate => d.wrapping_add(s),
            };
        }
        Ok(())
    }
}
