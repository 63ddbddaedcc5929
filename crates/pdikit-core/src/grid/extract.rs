//! Extraction of profiles and summary values

use super::SampleGrid;
use crate::error::{Error, Result};

impl SampleGrid {
    /// Get the intensity profile along one row.
    ///
    /// # Returns
    ///
    /// The sample values of `row` in column order; the length equals
    /// `cols`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row >= rows`.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let grid = SampleGrid::from_rows(&[&[10, 20, 30, 40, 50]]).unwrap();
    /// assert_eq!(grid.scan_line(0).unwrap(), vec![10, 20, 30, 40, 50]);
    /// assert!(grid.scan_line(1).is_err());
    /// ```
    pub fn scan_line(&self, row: u32) -> Result<Vec<u32>> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfRange {
                index: row as usize,
                len: self.rows() as usize,
            });
        }
        Ok(self.row(row).iter().map(|&s| u32::from(s)).collect())
    }

    /// Get the smallest and largest sample present.
    ///
    /// Returns `None` for a grid without samples.
    pub fn min_max(&self) -> Option<(u8, u8)> {
        self.data().iter().fold(None, |acc, &s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
    }
}
