//! Bit-plane regression test
//!
//! Plane extraction, accumulation and the arithmetic it relies on.

use pdikit_core::{Narrowing, SampleGrid};
use pdikit_test::{RegParams, checker_grid, ramp_grid};

#[test]
fn bitplane_reg() {
    let mut rp = RegParams::new("bitplane");

    let ramp = ramp_grid(1, 256).expect("ramp fixture");

    // --- Test 1: each plane keeps exactly half of the ramp ---
    for plane in 0..8 {
        let out = ramp.bit_plane(plane).expect("bit plane");
        let weight = 1u8 << plane;
        let on = out.data().iter().filter(|&&s| s == weight).count();
        let off = out.data().iter().filter(|&&s| s == 0).count();
        rp.compare_values(128.0, on as f64, 0.0);
        rp.compare_values(128.0, off as f64, 0.0);
    }

    // --- Test 2: all planes rebuild the grid without overflow ---
    let out = ramp.accumulate_bit_planes(0, 7).expect("accumulate all");
    rp.compare_grids(&ramp, &out);
    let white = SampleGrid::filled(4, 4, 255).expect("white");
    let out = white.accumulate_bit_planes(0, 7).expect("accumulate white");
    rp.compare_grids(&white, &out);

    // --- Test 3: upper planes quantize to multiples of 16 ---
    let out = ramp.accumulate_bit_planes(4, 7).expect("accumulate high");
    let quantized = ramp.map(|s| s & 0xF0);
    rp.compare_grids(&quantized, &out);
    let distinct = {
        let mut seen = [false; 256];
        out.data().iter().for_each(|&s| seen[s as usize] = true);
        seen.iter().filter(|&&b| b).count()
    };
    rp.compare_values(16.0, distinct as f64, 0.0);

    // --- Test 4: reversed range and out-of-range planes ---
    let out = ramp.accumulate_bit_planes(6, 1).expect("reversed");
    rp.compare_grids(&SampleGrid::new(1, 256).expect("zeros"), &out);
    rp.compare_values(1.0, ramp.bit_plane(8).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, ramp.accumulate_bit_planes(0, 8).is_err() as u8 as f64, 0.0);

    // --- Test 5: saturating vs truncating addition ---
    let checker = checker_grid(4, 4, 1).expect("checker fixture");
    let sat = checker.add(&checker, Narrowing::Saturate).expect("saturate");
    rp.compare_grids(&checker, &sat);
    let wrapped = checker.add(&checker, Narrowing::Truncate).expect("truncate");
    // 255 + 255 wraps to 254
    rp.compare_grids(&checker.map(|s| if s == 255 { 254 } else { 0 }), &wrapped);

    assert!(rp.cleanup(), "bitplane regression test failed");
}
