//! Bit-plane decomposition
//!
//! Plane `b` of a grid keeps, for every sample, only the contribution of
//! bit `b` to its intensity: `2^b` where the bit is set, 0 elsewhere.
//! Accumulating planes rebuilds a quantized version of the image and uses
//! saturating addition, the one place in the library where narrowing
//! clamps instead of wrapping.

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};
use crate::narrow::Narrowing;

/// Number of bits in a sample, and so the number of bit planes.
pub const SAMPLE_BITS: u32 = u8::BITS;

fn check_plane(plane: u32) -> Result<()> {
    if plane >= SAMPLE_BITS {
        return Err(Error::IndexOutOfRange {
            index: plane as usize,
            len: SAMPLE_BITS as usize,
        });
    }
    Ok(())
}

impl SampleGrid {
    /// Extract one bit plane.
    ///
    /// # Arguments
    ///
    /// * `plane` - Bit index, 0 (least significant) to 7
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `plane > 7`.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::SampleGrid;
    ///
    /// let grid = SampleGrid::from_rows(&[&[0b1010_0000, 0b0010_0001]]).unwrap();
    /// assert_eq!(grid.bit_plane(5).unwrap().data(), &[32, 32]);
    /// assert_eq!(grid.bit_plane(7).unwrap().data(), &[128, 0]);
    /// ```
    pub fn bit_plane(&self, plane: u32) -> Result<SampleGrid> {
        check_plane(plane)?;
        let weight = 1u8 << plane;
        Ok(self.map(|s| s & weight))
    }

    /// Sum the bit planes `start..=end` with saturating addition.
    ///
    /// `start > end` yields an all-zero grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is above 7.
    pub fn accumulate_bit_planes(&self, start: u32, end: u32) -> Result<SampleGrid> {
        self.accumulate_bit_planes_with(start, end, Narrowing::Saturate)
    }

    /// Sum the bit planes `start..=end` with an explicit narrowing rule.
    pub fn accumulate_bit_planes_with(
        &self,
        start: u32,
        end: u32,
        narrowing: Narrowing,
    ) -> Result<SampleGrid> {
        check_plane(start)?;
        check_plane(end)?;

        let mut acc = SampleGridMut::new(self.rows(), self.cols())?;
        for plane in start..=end {
            acc.add_inplace(&self.bit_plane(plane)?, narrowing)?;
        }
        Ok(acc.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SampleGrid {
        SampleGrid::from_vec(4, 4, (0..16).map(|v| v * 17).collect()).unwrap()
    }

    #[test]
    fn test_bit_plane_values() {
        let grid = ramp();
        for plane in 0..SAMPLE_BITS {
            let weight = 1u8 << plane;
            let extracted = grid.bit_plane(plane).unwrap();
            for (&s, &p) in grid.data().iter().zip(extracted.data()) {
                assert!(p == 0 || p == weight);
                assert_eq!(p != 0, s & weight != 0);
            }
        }
    }

    #[test]
    fn test_bit_plane_out_of_range() {
        let err = ramp().bit_plane(8).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 8, len: 8 }));
    }

    #[test]
    fn test_all_planes_rebuild_image() {
        let grid = ramp();
        assert_eq!(grid.accumulate_bit_planes(0, 7).unwrap(), grid);
    }

    #[test]
    fn test_all_planes_of_white_stay_255() {
        let white = SampleGrid::filled(3, 3, 255).unwrap();
        let acc = white.accumulate_bit_planes(0, 7).unwrap();
        assert!(acc.data().iter().all(|&s| s == 255));
    }

    #[test]
    fn test_high_planes_quantize() {
        let grid = SampleGrid::from_rows(&[&[0b1111_1111, 0b0101_0110]]).unwrap();
        let acc = grid.accumulate_bit_planes(4, 7).unwrap();
        assert_eq!(acc.data(), &[0b1111_0000, 0b0101_0000]);
    }

    #[test]
    fn test_reversed_range_is_zero() {
        let acc = ramp().accumulate_bit_planes(5, 2).unwrap();
        assert!(acc.data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_accumulate_checks_both_indices() {
        assert!(ramp().accumulate_bit_planes(9, 2).is_err());
        assert!(ramp().accumulate_bit_planes(0, 8).is_err());
    }
}
