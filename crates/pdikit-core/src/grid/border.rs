//! Boundary extension
//!
//! Enlarges a grid by `m` rows on top and bottom and `n` columns on left
//! and right so that a kernel can be applied at every original sample.
//! The source always lands at offset `(m, n)` of the result; the policy
//! decides what fills the border:
//!
//! - [`BorderPolicy::Zero`] - constant 0
//! - [`BorderPolicy::Mirror`] - reflection about the edge sample, which is
//!   itself not repeated (`c b | a b c | b a`)
//! - [`BorderPolicy::Replicate`] - nearest edge sample (`a a | a b c | c c`)

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};

/// Edge policy used when extending a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderPolicy {
    /// Border samples are 0
    #[default]
    Zero,
    /// Whole-sample reflection, excluding the edge sample
    ///
    /// With the source at offset `(m, n)`, padded row `m - 1 - k` holds
    /// source row `k + 1`, not row `k`: the edge row sits once at row `m`
    /// and the reflection starts with its neighbor. Columns behave the
    /// same way.
    Mirror,
    /// Repeat the nearest edge sample
    Replicate,
}

impl BorderPolicy {
    /// Map a coordinate relative to the source origin onto a source index.
    ///
    /// `i` may be negative or `>= len`. Returns `None` when the padded
    /// sample has no source (zero border, or an empty source axis).
    pub fn map_index(self, i: i64, len: u32) -> Option<u32> {
        if len == 0 {
            return None;
        }
        let len = i64::from(len);
        let idx = match self {
            BorderPolicy::Zero => {
                if (0..len).contains(&i) {
                    i
                } else {
                    return None;
                }
            }
            BorderPolicy::Replicate => i.clamp(0, len - 1),
            BorderPolicy::Mirror => {
                if len == 1 {
                    0
                } else {
                    // Folding repeats with period 2(len-1), so paddings
                    // wider than the source keep reflecting
                    let period = 2 * (len - 1);
                    let r = i.rem_euclid(period);
                    if r < len { r } else { period - r }
                }
            }
        };
        Some(idx as u32)
    }
}

impl SampleGrid {
    /// Extend the grid by `m` rows and `n` columns on every side.
    ///
    /// # Arguments
    ///
    /// * `m` - Rows added above and below
    /// * `n` - Columns added left and right
    /// * `policy` - How the border samples are filled
    ///
    /// # Returns
    ///
    /// New grid of `(rows + 2m) x (cols + 2n)` with the source at `(m, n)`.
    /// `m = n = 0` returns a copy. A source without samples produces a
    /// zero-filled grid for every policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the extended size overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::{BorderPolicy, SampleGrid};
    ///
    /// let grid = SampleGrid::from_rows(&[&[1, 2, 3]]).unwrap();
    /// let mirrored = grid.extend(0, 2, BorderPolicy::Mirror).unwrap();
    /// assert_eq!(mirrored.row(0), &[3, 2, 1, 2, 3, 2, 1]);
    /// let replicated = grid.extend(0, 2, BorderPolicy::Replicate).unwrap();
    /// assert_eq!(replicated.row(0), &[1, 1, 1, 2, 3, 3, 3]);
    /// ```
    pub fn extend(&self, m: u32, n: u32, policy: BorderPolicy) -> Result<SampleGrid> {
        let new_rows = extended_len(self.rows(), m)?;
        let new_cols = extended_len(self.cols(), n)?;
        let mut out = SampleGridMut::new(new_rows, new_cols)?;
        if self.is_empty() {
            return Ok(out.into());
        }

        let col_map: Vec<Option<u32>> = (0..new_cols)
            .map(|c| policy.map_index(i64::from(c) - i64::from(n), self.cols()))
            .collect();

        for (r, dst) in (0..new_rows).zip(out.iter_rows_mut()) {
            let Some(src_r) = policy.map_index(i64::from(r) - i64::from(m), self.rows()) else {
                continue;
            };
            let src = self.row(src_r);
            for (d, src_c) in dst.iter_mut().zip(&col_map) {
                if let Some(c) = src_c {
                    *d = src[*c as usize];
                }
            }
        }

        Ok(out.into())
    }

    /// Extend with a zero border.
    pub fn add_zero_border(&self, m: u32, n: u32) -> Result<SampleGrid> {
        self.extend(m, n, BorderPolicy::Zero)
    }

    /// Extend with a mirrored border.
    pub fn add_mirrored_border(&self, m: u32, n: u32) -> Result<SampleGrid> {
        self.extend(m, n, BorderPolicy::Mirror)
    }

    /// Extend with a replicated border.
    pub fn add_replicated_border(&self, m: u32, n: u32) -> Result<SampleGrid> {
        self.extend(m, n, BorderPolicy::Replicate)
    }
}

fn extended_len(len: u32, pad: u32) -> Result<u32> {
    pad.checked_mul(2)
        .and_then(|p| p.checked_add(len))
        .ok_or_else(|| {
            Error::InvalidParameter(format!("padding {pad} on extent {len} overflows"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> SampleGrid {
        SampleGrid::from_rows(&[&[10, 20, 30], &[40, 50, 60], &[70, 80, 90]]).unwrap()
    }

    #[test]
    fn test_zero_padding_identity() {
        let grid = grid_3x3();
        for policy in [
            BorderPolicy::Zero,
            BorderPolicy::Mirror,
            BorderPolicy::Replicate,
        ] {
            let out = grid.extend(0, 0, policy).unwrap();
            assert_eq!(out, grid);
            assert_eq!(out.ref_count(), 1);
        }
    }

    #[test]
    fn test_zero_border() {
        let out = grid_3x3().add_zero_border(1, 2).unwrap();
        assert_eq!(out.shape(), (5, 7));
        assert_eq!(out.row(0), &[0; 7]);
        assert_eq!(out.row(1), &[0, 0, 10, 20, 30, 0, 0]);
        assert_eq!(out.row(4), &[0; 7]);
    }

    #[test]
    fn test_mirror_border() {
        let out = grid_3x3().add_mirrored_border(2, 2).unwrap();
        assert_eq!(out.shape(), (7, 7));
        // Row 0 reflects source row 2, row 1 reflects source row 1
        assert_eq!(out.row(0), &[90, 80, 70, 80, 90, 80, 70]);
        assert_eq!(out.row(1), &[60, 50, 40, 50, 60, 50, 40]);
        assert_eq!(out.row(2), &[30, 20, 10, 20, 30, 20, 10]);
        assert_eq!(out.row(6), &[30, 20, 10, 20, 30, 20, 10]);
    }

    #[test]
    fn test_replicate_border() {
        let out = grid_3x3().add_replicated_border(2, 1).unwrap();
        assert_eq!(out.shape(), (7, 5));
        assert_eq!(out.row(0), &[10, 10, 20, 30, 30]);
        assert_eq!(out.row(1), &[10, 10, 20, 30, 30]);
        assert_eq!(out.row(3), &[40, 40, 50, 60, 60]);
        assert_eq!(out.row(6), &[70, 70, 80, 90, 90]);
    }

    #[test]
    fn test_mirror_wider_than_source_keeps_folding() {
        let grid = SampleGrid::from_rows(&[&[1, 2]]).unwrap();
        let out = grid.add_mirrored_border(0, 3).unwrap();
        assert_eq!(out.row(0), &[2, 1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_single_sample_source() {
        let grid = SampleGrid::filled(1, 1, 7).unwrap();
        let mirrored = grid.add_mirrored_border(1, 1).unwrap();
        assert!(mirrored.data().iter().all(|&s| s == 7));
        let replicated = grid.add_replicated_border(1, 1).unwrap();
        assert!(replicated.data().iter().all(|&s| s == 7));
    }

    #[test]
    fn test_empty_source_gives_zero_border() {
        let grid = SampleGrid::new(0, 0).unwrap();
        for policy in [
            BorderPolicy::Zero,
            BorderPolicy::Mirror,
            BorderPolicy::Replicate,
        ] {
            let out = grid.extend(2, 1, policy).unwrap();
            assert_eq!(out.shape(), (4, 2));
            assert!(out.data().iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn test_map_index_policies() {
        assert_eq!(BorderPolicy::Zero.map_index(-1, 5), None);
        assert_eq!(BorderPolicy::Zero.map_index(4, 5), Some(4));
        assert_eq!(BorderPolicy::Zero.map_index(5, 5), None);
        assert_eq!(BorderPolicy::Replicate.map_index(-3, 5), Some(0));
        assert_eq!(BorderPolicy::Replicate.map_index(9, 5), Some(4));
        let cases = [(-4, 4), (-1, 1), (0, 0), (4, 4), (5, 3), (8, 0), (9, 1)];
        for (i, expected) in cases {
            assert_eq!(BorderPolicy::Mirror.map_index(i, 5), Some(expected), "i={i}");
        }
        assert_eq!(BorderPolicy::Mirror.map_index(3, 0), None);
    }

    #[test]
    fn test_overflow_rejected() {
        let grid = SampleGrid::new(1, 1).unwrap();
        assert!(matches!(
            grid.add_zero_border(u32::MAX, 0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
