//! pdikit Core - the sample grid and its primitive operations
//!
//! This crate provides the data model shared by every pdikit crate:
//!
//! - [`SampleGrid`] / [`SampleGridMut`] - single-channel 8-bit image
//!   container (immutable / mutable)
//! - [`BorderPolicy`] - edge policies for boundary extension
//! - [`Narrowing`] - how wide intermediates are stored back into samples
//!
//! Operations that only need the grid itself live here as inherent
//! methods: boundary extension, cropping, bit-plane decomposition,
//! saturating arithmetic, mean squared error and scan-line extraction.
//! Kernel-based filtering and point transforms live in `pdikit-filter`.

pub mod error;
pub mod grid;
pub mod narrow;

pub use error::{Error, Result};
pub use grid::{BorderPolicy, SampleGrid, SampleGridMut};
pub use narrow::Narrowing;
