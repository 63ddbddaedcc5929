//! Binarization
//!
//! Fixed-threshold and band-pass binarization of a grid.

use crate::enhance::{TrcLut, trc_map};
use crate::{FilterError, FilterResult};
use pdikit_core::SampleGrid;
use tracing::trace;

/// Which side of the threshold becomes foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdType {
    /// `s > thresh` maps to `max_value`, everything else to 0.
    #[default]
    Binary,
    /// `s > thresh` maps to 0, everything else to `max_value`.
    BinaryInv,
}

/// Binarize against a fixed threshold.
///
/// # Example
///
/// ```
/// use pdikit_core::SampleGrid;
/// use pdikit_filter::{ThresholdType, threshold};
///
/// let grid = SampleGrid::from_rows(&[&[10, 100, 101, 250]]).unwrap();
/// let out = threshold(&grid, 100, 255, ThresholdType::Binary);
/// assert_eq!(out.data(), &[0, 0, 255, 255]);
/// ```
pub fn threshold(
    grid: &SampleGrid,
    thresh: u8,
    max_value: u8,
    kind: ThresholdType,
) -> SampleGrid {
    trace!(
        rows = grid.rows(),
        cols = grid.cols(),
        thresh,
        max_value,
        ?kind,
        "threshold"
    );
    let (above, below) = match kind {
        ThresholdType::Binary => (max_value, 0),
        ThresholdType::BinaryInv => (0, max_value),
    };
    let lut: TrcLut = core::array::from_fn(|i| if i > thresh as usize { above } else { below });
    let mut out = grid.to_mut();
    trc_map(&mut out, &lut);
    out.into()
}

/// Mark samples inside the inclusive band `[lo, hi]` with 255.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `lo > hi`.
pub fn in_range(grid: &SampleGrid, lo: u8, hi: u8) -> FilterResult<SampleGrid> {
    trace!(rows = grid.rows(), cols = grid.cols(), lo, hi, "in_range");
    if lo > hi {
        return Err(FilterError::InvalidParameters(format!(
            "empty band: lower bound {} above upper bound {}",
            lo, hi
        )));
    }
    Ok(grid.map(|s| if (lo..=hi).contains(&s) { 255 } else { 0 }))
}
