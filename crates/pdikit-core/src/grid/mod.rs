//! SampleGrid - the image container
//!
//! A `SampleGrid` is a rectangular `rows x cols` array of unsigned 8-bit
//! samples stored row-major. It is the only image type in pdikit: images,
//! masks and kernels are all sample grids.
//!
//! # Ownership model
//!
//! `SampleGrid` shares its storage through an `Arc`, so `clone()` is cheap
//! and nothing can mutate a grid another owner can see. To modify samples,
//! convert to `SampleGridMut` via [`SampleGrid::try_into_mut`] or
//! [`SampleGrid::to_mut`], then convert back with `Into<SampleGrid>`.
//!
//! # Coordinates
//!
//! All coordinates are `(row, col)`. Zero-sized grids (`0 x n`, `n x 0`)
//! are valid values.

mod access;
mod arith;
mod bitplane;
mod border;
mod clip;
mod compare;
mod extract;
mod serial;

pub use bitplane::SAMPLE_BITS;
pub use border::BorderPolicy;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid storage
#[derive(Debug, Clone, PartialEq, Eq)]
struct GridData {
    /// Number of rows
    rows: u32,
    /// Number of columns
    cols: u32,
    /// Samples, row-major, `rows * cols` entries
    data: Vec<u8>,
}

impl GridData {
    fn zeroed(rows: u32, cols: u32) -> Result<Self> {
        Self::filled(rows, cols, 0)
    }

    fn filled(rows: u32, cols: u32, value: u8) -> Result<Self> {
        let len = sample_count(rows, cols)?;
        Ok(GridData {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    fn into_grid(self) -> SampleGrid {
        SampleGrid {
            inner: Arc::new(self),
        }
    }

    #[inline]
    fn offset(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "sample ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    #[inline]
    fn row_range(&self, row: u32) -> std::ops::Range<usize> {
        assert!(
            row < self.rows,
            "row {row} outside grid with {} rows",
            self.rows
        );
        let start = row as usize * self.cols as usize;
        start..start + self.cols as usize
    }
}

/// Number of samples in a `rows x cols` grid, checked for overflow.
fn sample_count(rows: u32, cols: u32) -> Result<usize> {
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or_else(|| Error::InvalidParameter(format!("grid {rows}x{cols} is too large")))
}

/// Immutable single-channel 8-bit sample grid.
///
/// # Examples
///
/// ```
/// use pdikit_core::SampleGrid;
///
/// let grid = SampleGrid::new(480, 640).unwrap();
/// assert_eq!(grid.rows(), 480);
/// assert_eq!(grid.cols(), 640);
/// assert_eq!(grid.get(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct SampleGrid {
    inner: Arc<GridData>,
}

impl SampleGrid {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rows * cols` overflows.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        Ok(GridData::zeroed(rows, cols)?.into_grid())
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(rows: u32, cols: u32, value: u8) -> Result<Self> {
        Ok(GridData::filled(rows, cols, value)?.into_grid())
    }

    /// Create a grid from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<u8>) -> Result<Self> {
        let len = sample_count(rows, cols)?;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "{} samples supplied for a {}x{} grid",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(GridData { rows, cols, data }.into_grid())
    }

    /// Create a grid from a slice of rows.
    ///
    /// An empty slice yields a `0 x 0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let grid = SampleGrid::from_rows(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert_eq!(grid.get(1, 2), Some(6));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(Error::InvalidParameter(format!(
                "row {bad} has {} samples, expected {cols}",
                rows[bad].len()
            )));
        }
        let nrows = u32::try_from(rows.len())
            .map_err(|_| Error::InvalidParameter("too many rows".into()))?;
        let ncols =
            u32::try_from(cols).map_err(|_| Error::InvalidParameter("too many columns".into()))?;
        Self::from_vec(nrows, ncols, rows.concat())
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.inner.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.inner.cols
    }

    /// Get the shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32) {
        (self.inner.rows, self.inner.cols)
    }

    /// Get the total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Check whether the grid has no samples (zero rows or zero columns).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        &self.inner.data[self.inner.row_range(row)]
    }

    /// Iterate over the rows of the grid.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.inner.rows).map(move |r| self.row(r))
    }

    /// Check whether two grids have the same number of rows and columns.
    pub fn same_shape(&self, other: &SampleGrid) -> bool {
        self.shape() == other.shape()
    }

    /// Fail with [`Error::DimensionMismatch`] unless `other` has this shape.
    pub(crate) fn check_same_shape(&self, other: &SampleGrid) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            })
        }
    }

    /// Get the number of strong references to the shared storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new grid with every sample passed through `f`.
    ///
    /// The result never shares storage with `self`.
    pub fn map(&self, f: impl Fn(u8) -> u8) -> SampleGrid {
        GridData {
            rows: self.inner.rows,
            cols: self.inner.cols,
            data: self.inner.data.iter().map(|&s| f(s)).collect(),
        }
        .into_grid()
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()`, which shares storage, the copy is independent.
    pub fn deep_clone(&self) -> Self {
        GridData::clone(&self.inner).into_grid()
    }

    /// Try to get mutable access to the samples.
    ///
    /// Succeeds only if there is exactly one reference to the storage.
    pub fn try_into_mut(self) -> std::result::Result<SampleGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(SampleGridMut { inner }),
            Err(inner) => Err(SampleGrid { inner }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> SampleGridMut {
        SampleGridMut {
            inner: GridData::clone(&self.inner),
        }
    }
}

impl PartialEq for SampleGrid {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for SampleGrid {}

/// Mutable sample grid
///
/// Exclusive owner of its samples. Convert back to an immutable
/// [`SampleGrid`] using `Into<SampleGrid>`.
#[derive(Debug)]
pub struct SampleGridMut {
    inner: GridData,
}

impl SampleGridMut {
    /// Create a zero-filled mutable grid.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        Ok(SampleGridMut {
            inner: GridData::zeroed(rows, cols)?,
        })
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.inner.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.inner.cols
    }

    /// Get the shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32) {
        (self.inner.rows, self.inner.cols)
    }

    /// Get the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the samples of one row.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        &self.inner.data[self.inner.row_range(row)]
    }

    /// Get mutable access to the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u8] {
        let range = self.inner.row_range(row);
        &mut self.inner.data[range]
    }

    /// Iterate mutably over the rows of the grid.
    pub fn iter_rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // chunks_exact_mut rejects a zero chunk size; a grid without
        // columns has no samples to visit anyway
        let cols = (self.inner.cols as usize).max(1);
        self.inner.data.chunks_exact_mut(cols)
    }

    /// Fill every sample with `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<SampleGridMut> for SampleGrid {
    fn from(grid: SampleGridMut) -> Self {
        grid.inner.into_grid()
    }
}
