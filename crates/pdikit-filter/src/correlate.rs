//! Correlation and averaging
//!
//! Correlation slides the kernel over the image without flipping it and
//! divides each weighted sum by the kernel area. It never pads: samples
//! closer than the kernel half-width to an edge stay 0. Averaging gets a
//! full-size result by zero-padding first and cropping afterwards.

use crate::{FilterError, FilterResult, Kernel};
use pdikit_core::{Narrowing, SampleGrid, SampleGridMut};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Correlate an image with a kernel, truncating results into 8 bits.
///
/// Sums above 255 after normalization wrap modulo 256. Use
/// [`correlate_with`] to clamp instead.
///
/// # Example
///
/// ```
/// use pdikit_core::SampleGrid;
/// use pdikit_filter::{Kernel, correlate};
///
/// let image = SampleGrid::filled(3, 3, 255).unwrap();
/// let out = correlate(&image, &Kernel::uniform(3, 3).unwrap()).unwrap();
/// assert_eq!(out.get(1, 1), Some(255));
/// assert_eq!(out.get(0, 0), Some(0));
/// ```
pub fn correlate(image: &SampleGrid, kernel: &Kernel) -> FilterResult<SampleGrid> {
    correlate_with(image, kernel, Narrowing::Truncate)
}

/// Correlate an image with a kernel using an explicit narrowing rule.
///
/// Output sample `(x, y)` with `hr <= x < rows - hr` and
/// `hc <= y < cols - hc` is
/// `Σ kernel[s + hr, t + hc] * image[x + s, y + t] / (kernel rows * kernel cols)`
/// over `s` in `[-hr, hr]` and `t` in `[-hc, hc]`, where `(hr, hc)` is
/// [`Kernel::half_extent`]. Every other output sample is 0.
///
/// For an even kernel dimension the half-width rounds down, so the last
/// kernel row or column is never read while the divisor still counts it.
/// This looks like an accident of integer division; it is kept because
/// reference output depends on it.
pub fn correlate_with(
    image: &SampleGrid,
    kernel: &Kernel,
    narrowing: Narrowing,
) -> FilterResult<SampleGrid> {
    let (rows, cols) = image.shape();
    trace!(
        rows,
        cols,
        kernel_rows = kernel.rows(),
        kernel_cols = kernel.cols(),
        ?narrowing,
        "correlate"
    );

    let mut out = SampleGridMut::new(rows, cols)?;
    let (hr, hc) = kernel.half_extent();
    if rows <= 2 * hr || cols <= 2 * hc {
        debug!(rows, cols, hr, hc, "image smaller than kernel footprint");
        return Ok(out.into());
    }

    let ctx = RowContext {
        image,
        kernel,
        hr,
        hc,
        narrowing,
    };

    #[cfg(feature = "parallel")]
    {
        out.data_mut()
            .par_chunks_mut(cols as usize)
            .enumerate()
            .for_each(|(x, dst)| ctx.fill_row(x as u32, dst));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (x, dst) in out.iter_rows_mut().enumerate() {
            ctx.fill_row(x as u32, dst);
        }
    }

    Ok(out.into())
}

struct RowContext<'a> {
    image: &'a SampleGrid,
    kernel: &'a Kernel,
    hr: u32,
    hc: u32,
    narrowing: Narrowing,
}

impl RowContext<'_> {
    /// Compute output row `x`; rows inside the top or bottom margin stay 0.
    fn fill_row(&self, x: u32, dst: &mut [u8]) {
        let rows = self.image.rows();
        if x < self.hr || x >= rows - self.hr {
            return;
        }

        let span_r = 2 * self.hr + 1;
        let span_c = (2 * self.hc + 1) as usize;
        let area = self.kernel.area();
        let weights = self.kernel.weights();
        let last = dst.len() - self.hc as usize;

        for (y, d) in dst.iter_mut().enumerate().take(last).skip(self.hc as usize) {
            let left = y - self.hc as usize;
            let mut sum = 0u64;
            for s in 0..span_r {
                let src = &self.image.row(x - self.hr + s)[left..left + span_c];
                let w = &weights.row(s)[..span_c];
                sum += src
                    .iter()
                    .zip(w)
                    .map(|(&p, &k)| u64::from(p) * u64::from(k))
                    .sum::<u64>();
            }
            *d = self.narrowing.narrow_int((sum / area) as i64);
        }
    }
}

/// Smooth an image with an `m x n` kernel, keeping its size.
///
/// The image is zero-padded by `m - 1` rows and `n - 1` columns on every
/// side, correlated with `kernel` (a uniform `m x n` kernel when `None`),
/// and the `rows x cols` region starting at `(m - 1, n - 1)` is cropped
/// out of the result. The window only sets the padding and crop offset;
/// a kernel of any shape is accepted.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `m` or `n` is zero.
///
/// # Example
///
/// ```
/// use pdikit_core::SampleGrid;
/// use pdikit_filter::average;
///
/// let image = SampleGrid::filled(4, 4, 90).unwrap();
/// let out = average(&image, 3, 3, None).unwrap();
/// assert_eq!(out.shape(), (4, 4));
/// assert_eq!(out.get(1, 1), Some(90));
/// assert_eq!(out.get(0, 0), Some(40));
/// ```
pub fn average(
    image: &SampleGrid,
    m: u32,
    n: u32,
    kernel: Option<&Kernel>,
) -> FilterResult<SampleGrid> {
    trace!(rows = image.rows(), cols = image.cols(), m, n, "average");
    if m == 0 || n == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "averaging window must be at least 1x1, got {}x{}",
            m, n
        )));
    }

    let uniform;
    let kernel = match kernel {
        Some(k) => k,
        None => {
            debug!(m, n, "using uniform kernel");
            uniform = Kernel::uniform(m, n)?;
            &uniform
        }
    };

    let padded = image.add_zero_border(m - 1, n - 1)?;
    let filtered = correlate(&padded, kernel)?;
    Ok(filtered.crop(m - 1, n - 1, image.rows(), image.cols())?)
}

/// Box average with a `size x size` uniform kernel.
pub fn box_average(image: &SampleGrid, size: u32) -> FilterResult<SampleGrid> {
    average(image, size, size, None)
}
