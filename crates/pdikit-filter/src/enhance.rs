//! Point transforms
//!
//! Negative, logarithmic and power-law intensity mappings. Each output
//! sample depends only on the input sample at the same position (and, for
//! the negative and log transforms, on a statistic of the whole grid), so
//! every transform is evaluated once per intensity level into a [`TrcLut`]
//! and then applied with [`trc_map`].

use crate::{FilterError, FilterResult};
use pdikit_core::{Narrowing, SampleGrid, SampleGridMut};
use tracing::{debug, trace};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values [0..255] to output sample values [0..255].
pub type TrcLut = [u8; 256];

/// Apply a lookup table to every sample in place.
pub fn trc_map(grid: &mut SampleGridMut, lut: &TrcLut) {
    for s in grid.data_mut() {
        *s = lut[*s as usize];
    }
}

fn apply_lut(grid: &SampleGrid, lut: &TrcLut) -> SampleGrid {
    let mut out = grid.to_mut();
    trc_map(&mut out, lut);
    out.into()
}

/// Photographic negative relative to the brightest sample.
///
/// Each sample becomes `max - s`, where `max` is the largest sample in
/// this grid (not 255). Applying it twice restores the grid whenever the
/// grid contains a 0.
///
/// # Example
///
/// ```
/// use pdikit_core::SampleGrid;
/// use pdikit_filter::negative;
///
/// let grid = SampleGrid::from_rows(&[&[0, 100, 200]]).unwrap();
/// assert_eq!(negative(&grid).data(), &[200, 100, 0]);
/// ```
pub fn negative(grid: &SampleGrid) -> SampleGrid {
    trace!(rows = grid.rows(), cols = grid.cols(), "negative");
    let Some((_, max)) = grid.min_max() else {
        return grid.deep_clone();
    };
    let lut: TrcLut = core::array::from_fn(|i| max.wrapping_sub(i as u8));
    apply_lut(grid, &lut)
}

/// Logarithmic transform with min-max normalization.
///
/// Computes `v = c * ln(1 + s)` for every sample, then stretches the
/// values actually present to the full range:
/// `round((v - vmin) * 255 / (vmax - vmin))`. A grid whose values are all
/// equal after the log maps to 0 everywhere.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `c` is not finite.
pub fn log_transform(grid: &SampleGrid, c: f64) -> FilterResult<SampleGrid> {
    trace!(rows = grid.rows(), cols = grid.cols(), c, "log_transform");
    if !c.is_finite() {
        return Err(FilterError::InvalidParameters(format!(
            "log scale must be finite, got {}",
            c
        )));
    }

    let levels: [f64; 256] = core::array::from_fn(|i| c * (1.0 + i as f64).ln());

    let mut present = [false; 256];
    for &s in grid.data() {
        present[s as usize] = true;
    }
    let (vmin, vmax) = levels
        .iter()
        .zip(present)
        .filter(|&(_, p)| p)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (&v, _)| {
            (lo.min(v), hi.max(v))
        });

    let range = vmax - vmin;
    if range <= 0.0 {
        debug!(vmin, vmax, "flat log range, output is zero");
        return Ok(SampleGrid::new(grid.rows(), grid.cols())?);
    }

    // Levels absent from the grid may fall outside [0, 255]; the cast clamps
    let lut: TrcLut =
        core::array::from_fn(|i| ((levels[i] - vmin) * 255.0 / range).round() as u8);
    Ok(apply_lut(grid, &lut))
}

/// Parameters of a power-law (gamma) transform: `c * (s + e)^gamma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    gamma: f32,
    scale: f32,
    offset: f32,
    narrowing: Narrowing,
}

impl PowerLaw {
    /// Power law with the given exponent, scale 1, offset 0, truncating.
    pub fn new(gamma: f32) -> Self {
        Self {
            gamma,
            scale: 1.0,
            offset: 0.0,
            narrowing: Narrowing::Truncate,
        }
    }

    /// Set the multiplier `c`.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the offset `e` added to each sample before exponentiation.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set how results outside `[0, 255]` are stored.
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Exponent.
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Multiplier.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Narrowing rule.
    pub fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    /// Evaluate the curve for every input level.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if any parameter is not
    /// finite.
    pub fn lut(&self) -> FilterResult<TrcLut> {
        if !(self.gamma.is_finite() && self.scale.is_finite() && self.offset.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "power law parameters must be finite: {:?}",
                self
            )));
        }
        Ok(core::array::from_fn(|i| {
            let v = self.scale * (i as f32 + self.offset).powf(self.gamma);
            self.narrowing.narrow_float(f64::from(v))
        }))
    }
}

/// Power-law (gamma) transform.
///
/// Evaluates `c * (s + e)^gamma` in `f32` and narrows it with the rule of
/// `law`; the default truncation wraps values above 255 instead of
/// clamping them.
///
/// # Example
///
/// ```
/// use pdikit_core::{Narrowing, SampleGrid};
/// use pdikit_filter::{PowerLaw, gamma_transform};
///
/// let grid = SampleGrid::from_rows(&[&[3, 20]]).unwrap();
/// let squared = gamma_transform(&grid, &PowerLaw::new(2.0)).unwrap();
/// assert_eq!(squared.data(), &[9, 144]);
///
/// let law = PowerLaw::new(2.0).with_narrowing(Narrowing::Saturate);
/// assert_eq!(gamma_transform(&grid, &law).unwrap().data(), &[9, 255]);
/// ```
pub fn gamma_transform(grid: &SampleGrid, law: &PowerLaw) -> FilterResult<SampleGrid> {
    trace!(
        rows = grid.rows(),
        cols = grid.cols(),
        gamma = law.gamma,
        scale = law.scale,
        offset = law.offset,
        "gamma_transform"
    );
    let lut = law.lut()?;
    Ok(apply_lut(grid, &lut))
}
