//! Point transform regression test
//!
//! Negative, logarithmic and power-law transforms.

use pdikit_core::{Narrowing, SampleGrid};
use pdikit_filter::{PowerLaw, gamma_transform, log_transform, negative};
use pdikit_test::{RegParams, checker_grid, ramp_grid};

#[test]
fn enhance_reg() {
    let mut rp = RegParams::new("enhance");

    let ramp = ramp_grid(9, 9).expect("ramp fixture");

    // --- Test 1: negative of a grid containing 0 is an involution ---
    let neg = negative(&ramp);
    rp.compare_grids(&ramp, &negative(&neg));
    rp.compare_values(255.0, neg.get(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(0.0, neg.get(8, 8).unwrap_or(255) as f64, 0.0);

    // --- Test 2: negative is relative to the local maximum ---
    let dim = SampleGrid::from_rows(&[&[20, 40], &[60, 80]]).expect("dim");
    let expected = SampleGrid::from_rows(&[&[60, 40], &[20, 0]]).expect("expected");
    rp.compare_grids(&expected, &negative(&dim));

    // --- Test 3: log transform stretches to the full range ---
    let out = log_transform(&ramp, 1.0).expect("log");
    let (lo, hi) = out.min_max().unwrap_or((1, 0));
    rp.compare_values(0.0, lo as f64, 0.0);
    rp.compare_values(255.0, hi as f64, 0.0);
    // The log curve lifts midtones above the linear ramp
    let mid = ramp.get(4, 4).unwrap_or(0);
    rp.compare_values(1.0, (out.get(4, 4).unwrap_or(0) > mid) as u8 as f64, 0.0);

    // --- Test 4: log of a flat grid is all zero ---
    let flat = SampleGrid::filled(4, 4, 128).expect("flat");
    let out = log_transform(&flat, 2.5).expect("log flat");
    rp.compare_grids(&SampleGrid::new(4, 4).expect("zeros"), &out);

    // --- Test 5: log of a binary grid keeps it binary ---
    let checker = checker_grid(8, 8, 2).expect("checker fixture");
    rp.compare_grids(&checker, &log_transform(&checker, 1.0).expect("log checker"));

    // --- Test 6: gamma 1 with scale 1 is the identity ---
    let out = gamma_transform(&ramp, &PowerLaw::new(1.0)).expect("gamma identity");
    rp.compare_grids(&ramp, &out);

    // --- Test 7: truncation wraps, saturation clamps ---
    let grid = SampleGrid::from_rows(&[&[10, 16, 17, 100]]).expect("grid");
    let wrapped = gamma_transform(&grid, &PowerLaw::new(2.0)).expect("gamma wrap");
    let expected = SampleGrid::from_rows(&[&[100, 0, 33, 16]]).expect("expected");
    rp.compare_grids(&expected, &wrapped);
    let law = PowerLaw::new(2.0).with_narrowing(Narrowing::Saturate);
    let clamped = gamma_transform(&grid, &law).expect("gamma clamp");
    let expected = SampleGrid::from_rows(&[&[100, 255, 255, 255]]).expect("expected");
    rp.compare_grids(&expected, &clamped);

    // --- Test 8: scaled square root spans the full range ---
    let law = PowerLaw::new(0.5).with_scale(16.0);
    let out = gamma_transform(&ramp, &law).expect("gamma sqrt");
    rp.compare_values(0.0, out.get(0, 0).unwrap_or(1) as f64, 0.0);
    // 16 * sqrt(255) = 255.5
    rp.compare_values(255.0, out.get(8, 8).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "enhance regression test failed");
}
