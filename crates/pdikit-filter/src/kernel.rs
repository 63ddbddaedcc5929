//! Correlation kernels
//!
//! A kernel is a non-empty grid of unsigned 8-bit weights. Odd dimensions
//! center exactly on the output sample; for even dimensions the half-width
//! rounds down and the last row or column is never read.

use crate::{FilterError, FilterResult};
use pdikit_core::SampleGrid;

/// A 2D correlation kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    weights: SampleGrid,
}

impl Kernel {
    /// Create a kernel with every weight set to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is zero.
    pub fn uniform(rows: u32, cols: u32) -> FilterResult<Self> {
        check_dims(rows, cols)?;
        Self::from_grid(SampleGrid::filled(rows, cols, 1)?)
    }

    /// Create a kernel from row-major weights.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_filter::Kernel;
    ///
    /// let k = Kernel::from_slice(1, 3, &[1, 2, 1]).unwrap();
    /// assert_eq!(k.get(0, 1), Some(2));
    /// assert!(Kernel::from_slice(2, 2, &[1, 2, 3]).is_err());
    /// ```
    pub fn from_slice(rows: u32, cols: u32, weights: &[u8]) -> FilterResult<Self> {
        check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if weights.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                expected,
                rows,
                cols,
                weights.len()
            )));
        }
        Self::from_grid(SampleGrid::from_vec(rows, cols, weights.to_vec())?)
    }

    /// Use an existing grid as the kernel weights.
    pub fn from_grid(weights: SampleGrid) -> FilterResult<Self> {
        check_dims(weights.rows(), weights.cols())?;
        Ok(Self { weights })
    }

    /// Number of kernel rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.weights.rows()
    }

    /// Number of kernel columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.weights.cols()
    }

    /// Half-extent `(⌊(rows-1)/2⌋, ⌊(cols-1)/2⌋)` of the kernel footprint.
    #[inline]
    pub fn half_extent(&self) -> (u32, u32) {
        ((self.rows() - 1) / 2, (self.cols() - 1) / 2)
    }

    /// Number of weights, the divisor of a normalized correlation.
    #[inline]
    pub fn area(&self) -> u64 {
        self.weights.len() as u64
    }

    /// Get the weight at (row, col).
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        self.weights.get(row, col)
    }

    /// Borrow the weights as a grid.
    pub fn weights(&self) -> &SampleGrid {
        &self.weights
    }
}

fn check_dims(rows: u32, cols: u32) -> FilterResult<()> {
    if rows == 0 || cols == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel must be at least 1x1, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let k = Kernel::uniform(3, 5).unwrap();
        assert_eq!((k.rows(), k.cols()), (3, 5));
        assert_eq!(k.area(), 15);
        assert!(k.weights().data().iter().all(|&w| w == 1));
    }

    #[test]
    fn test_empty_kernel_rejected() {
        assert!(matches!(
            Kernel::uniform(0, 3),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::from_slice(3, 0, &[]),
            Err(FilterError::InvalidKernel(_))
        ));
        let empty = SampleGrid::new(0, 0).unwrap();
        assert!(Kernel::from_grid(empty).is_err());
    }

    #[test]
    fn test_half_extent() {
        assert_eq!(Kernel::uniform(3, 3).unwrap().half_extent(), (1, 1));
        assert_eq!(Kernel::uniform(1, 1).unwrap().half_extent(), (0, 0));
        assert_eq!(Kernel::uniform(4, 2).unwrap().half_extent(), (1, 0));
        assert_eq!(Kernel::uniform(5, 6).unwrap().half_extent(), (2, 2));
    }

    #[test]
    fn test_from_slice_layout() {
        let k = Kernel::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(k.get(0, 2), Some(3));
        assert_eq!(k.get(1, 0), Some(4));
        assert_eq!(k.get(2, 0), None);
    }
}
