//! Sample access functions
//!
//! Getting and setting individual samples. Checked accessors return
//! `Option`/`Result`; the `_unchecked` variants panic on out-of-range
//! coordinates instead of reading past a row.

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};

impl SampleGrid {
    /// Get a sample at (row, col).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row < self.rows() && col < self.cols() {
            Some(self.get_unchecked(row, col))
        } else {
            None
        }
    }

    /// Get a sample without returning an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.inner.data[self.inner.offset(row, col)]
    }
}

impl SampleGridMut {
    /// Get a sample at (row, col).
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row < self.rows() && col < self.cols() {
            Some(self.get_unchecked(row, col))
        } else {
            None
        }
    }

    /// Get a sample without returning an `Option`.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.inner.data[self.inner.offset(row, col)]
    }

    /// Set a sample at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if coordinates are out of bounds.
    pub fn set(&mut self, row: u32, col: u32, value: u8) -> Result<()> {
        self.check_coords(row, col)?;
        self.set_unchecked(row, col, value);
        Ok(())
    }

    /// Set a sample without returning a `Result`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, value: u8) {
        let offset = self.inner.offset(row, col);
        self.inner.data[offset] = value;
    }

    /// Flip a sample between background and foreground.
    ///
    /// A zero sample becomes 255 and any non-zero sample becomes 0. This is
    /// the primitive behind painting a structuring element cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if coordinates are out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGridMut;
    ///
    /// let mut mask = SampleGridMut::new(3, 3).unwrap();
    /// mask.toggle(1, 1).unwrap();
    /// assert_eq!(mask.get(1, 1), Some(255));
    /// mask.toggle(1, 1).unwrap();
    /// assert_eq!(mask.get(1, 1), Some(0));
    /// ```
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<u8> {
        self.check_coords(row, col)?;
        let value = if self.get_unchecked(row, col) == 0 {
            255
        } else {
            0
        };
        self.set_unchecked(row, col, value);
        Ok(value)
    }

    fn check_coords(&self, row: u32, col: u32) -> Result<()> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfRange {
                index: row as usize,
                len: self.rows() as usize,
            });
        }
        if col >= self.cols() {
            return Err(Error::IndexOutOfRange {
                index: col as usize,
                len: self.cols() as usize,
            });
        }
        Ok(())
    }
}
