//! pdikit-filter - Spatial filtering and point transforms
//!
//! This crate provides the operations built on top of `pdikit-core`:
//!
//! - Correlation with arbitrary unsigned kernels
//! - Averaging (zero-pad, correlate, crop)
//! - Point transforms (negative, logarithmic, power-law)
//! - Binarization (fixed threshold, inclusive band)
//!
//! With the `parallel` feature, correlation computes output rows on the
//! rayon thread pool. Results are identical either way.

pub mod correlate;
pub mod enhance;
mod error;
pub mod kernel;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use correlate::{average, box_average, correlate, correlate_with};
pub use enhance::{PowerLaw, TrcLut, gamma_transform, log_transform, negative, trc_map};
pub use threshold::{ThresholdType, in_range, threshold};
