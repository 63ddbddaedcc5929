//! pdikit - Image processing primitives for Rust
//!
//! A small library of spatial-filtering and point-transform building
//! blocks on single-channel 8-bit images, meant for composing
//! higher-level filters from first principles.
//!
//! # Overview
//!
//! - Boundary extension (zero, mirror, replicate)
//! - Correlation with unsigned kernels and averaging
//! - Point transforms (negative, logarithmic, power-law)
//! - Bit-plane decomposition and accumulation
//! - Binarization, mean squared error, scan lines
//!
//! # Example
//!
//! ```
//! use pdikit::SampleGrid;
//! use pdikit::filter::box_average;
//!
//! let grid = SampleGrid::filled(8, 8, 100).unwrap();
//! let smooth = box_average(&grid, 3).unwrap();
//! assert_eq!(smooth.shape(), (8, 8));
//! assert_eq!(smooth.get(4, 4), Some(100));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pdikit_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use pdikit_filter as filter;
