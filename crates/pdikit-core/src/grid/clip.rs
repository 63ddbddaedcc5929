//! Region-of-interest extraction

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};

impl SampleGrid {
    /// Copy a rectangular region out of the grid.
    ///
    /// # Arguments
    ///
    /// * `top` - First row of the region
    /// * `left` - First column of the region
    /// * `rows` - Height of the region
    /// * `cols` - Width of the region
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the region reaches outside
    /// the grid. Unlike an image-editing crop the region is never clipped,
    /// because callers rely on getting exactly `rows x cols` back.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let grid = SampleGrid::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]).unwrap();
    /// let roi = grid.crop(1, 1, 2, 2).unwrap();
    /// assert_eq!(roi.data(), &[5, 6, 8, 9]);
    /// ```
    pub fn crop(&self, top: u32, left: u32, rows: u32, cols: u32) -> Result<SampleGrid> {
        let fits = |start: u32, len: u32, extent: u32| {
            start.checked_add(len).is_some_and(|end| end <= extent)
        };
        if !fits(top, rows, self.rows()) || !fits(left, cols, self.cols()) {
            return Err(Error::InvalidParameter(format!(
                "region {rows}x{cols} at ({top}, {left}) exceeds {}x{} grid",
                self.rows(),
                self.cols()
            )));
        }

        let mut out = SampleGridMut::new(rows, cols)?;
        let (l, r) = (left as usize, (left + cols) as usize);
        for (dst, row) in out.iter_rows_mut().zip(top..top + rows) {
            dst.copy_from_slice(&self.row(row)[l..r]);
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_full_grid() {
        let grid = SampleGrid::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
        assert_eq!(grid.crop(0, 0, 2, 2).unwrap(), grid);
    }

    #[test]
    fn test_crop_asymmetric_offset() {
        let grid = SampleGrid::from_vec(3, 4, (0..12).collect()).unwrap();
        let roi = grid.crop(1, 2, 2, 2).unwrap();
        assert_eq!(roi.data(), &[6, 7, 10, 11]);
    }

    #[test]
    fn test_crop_outside_rejected() {
        let grid = SampleGrid::new(3, 4).unwrap();
        assert!(grid.crop(2, 0, 2, 1).is_err());
        assert!(grid.crop(0, 3, 1, 2).is_err());
        assert!(grid.crop(u32::MAX, 0, 2, 1).is_err());
    }

    #[test]
    fn test_crop_empty_region() {
        let grid = SampleGrid::new(3, 4).unwrap();
        let roi = grid.crop(3, 4, 0, 0).unwrap();
        assert!(roi.is_empty());
    }
}
