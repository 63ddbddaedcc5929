//! pdikit-test - Regression test framework for pdikit
//!
//! Regression tests run a sequence of numbered checks against a
//! [`RegParams`], collect every failure, and report them together in
//! [`RegParams::cleanup`]. Two modes are supported:
//!
//! - **Compare**: Compare results with expected values (default)
//! - **Display**: Compare, and also dump every compared grid to stderr
//!
//! # Usage
//!
//! ```
//! use pdikit_test::{ramp_grid, RegParams};
//!
//! let mut rp = RegParams::new("usage");
//! let grid = ramp_grid(4, 4).unwrap();
//! rp.compare_values(255.0, grid.get(3, 3).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pdikit_core::SampleGrid;

/// Build a grid whose samples rise linearly along the anti-diagonal.
///
/// Sample `(r, c)` is `255 * (r + c) / (rows + cols - 2)`, so the top-left
/// corner is 0 and the bottom-right corner is 255. A 1×1 ramp is all zero.
pub fn ramp_grid(rows: u32, cols: u32) -> TestResult<SampleGrid> {
    let span = (rows + cols).saturating_sub(2).max(1);
    let data = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (255 * (r + c) / span) as u8))
        .collect();
    SampleGrid::from_vec(rows, cols, data).map_err(|source| TestError::Fixture {
        name: "ramp",
        source,
    })
}

/// Build a checkerboard of `cell`×`cell` squares alternating 0 and 255.
///
/// The top-left cell is 0.
pub fn checker_grid(rows: u32, cols: u32, cell: u32) -> TestResult<SampleGrid> {
    let cell = cell.max(1);
    let data = (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| {
                if (r / cell + c / cell) % 2 == 0 {
                    0
                } else {
                    255
                }
            })
        })
        .collect();
    SampleGrid::from_vec(rows, cols, data).map_err(|source| TestError::Fixture {
        name: "checker",
        source,
    })
}

/// Foreground positions of [`morphology_set`].
const MORPHOLOGY_POINTS: [(u32, u32); 30] = [
    (1, 1),
    (1, 2),
    (1, 3),
    (2, 3),
    (3, 3),
    (4, 2),
    (4, 3),
    (4, 4),
    (7, 7),
    (7, 8),
    (7, 9),
    (8, 9),
    (9, 6),
    (9, 7),
    (9, 8),
    (9, 9),
    (10, 7),
    (10, 8),
    (10, 9),
    (6, 1),
    (7, 2),
    (8, 3),
    (10, 1),
    (2, 8),
    (3, 7),
    (3, 8),
    (3, 9),
    (4, 7),
    (4, 8),
    (4, 9),
];

/// Build the 12×11 binary set used by the morphology checks.
///
/// Background is 0, foreground is 255. The set holds two compact blobs, a
/// short diagonal stroke and a few isolated points near the border.
pub fn morphology_set() -> TestResult<SampleGrid> {
    let fixture = |source| TestError::Fixture {
        name: "morphology",
        source,
    };
    let mut grid = SampleGrid::new(12, 11).map_err(fixture)?.to_mut();
    for (row, col) in MORPHOLOGY_POINTS {
        grid.set(row, col, 255).map_err(fixture)?;
    }
    Ok(grid.into())
}
