//! Rescaling regression test
//!
//! Exercises the full engine through validation, uniform-field
//! invariance, a concrete upscale scenario, and determinism over a
//! seeded random image.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rescale_core::{GrayRaster, RescaleError, resample};
use rescale_test::{RegParams, gradient_raster, uniform_raster};

#[test]
fn rescale_reg() {
    let mut rp = RegParams::new("rescale");

    // --- Test 1: zero dimension is rejected ---
    let src = vec![0u8; 0];
    let mut dest = vec![0u8; 100];
    let err = resample(&mut dest, &src, 10, 10, 10, 0).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, RescaleError::InvalidDimension { .. }) as u32 as f64,
        0.0,
    );

    // --- Test 2: scale factor 2.1 is rejected, destination untouched ---
    let src = vec![0u8; 100];
    let mut dest = vec![0xffu8; 21 * 10];
    let err = resample(&mut dest, &src, 21, 10, 10, 10).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, RescaleError::ScaleOutOfRange { .. }) as u32 as f64,
        0.0,
    );
    rp.compare_values(1.0, dest.iter().all(|&b| b == 0xff) as u32 as f64, 0.0);

    // --- Test 3: equal dimensions succeed without copying ---
    let src = vec![42u8; 64];
    let mut dest = vec![0x7fu8; 64];
    let ok = resample(&mut dest, &src, 8, 8, 8, 8).is_ok();
    rp.compare_values(1.0, ok as u32 as f64, 0.0);
    rp.compare_values(1.0, dest.iter().all(|&b| b == 0x7f) as u32 as f64, 0.0);

    // --- Test 4: uniform fields stay uniform within +-1 ---
    for (ws, hs, wd, hd) in [(4, 4, 6, 6), (10, 10, 7, 7), (9, 5, 13, 8), (16, 16, 22, 22)] {
        let value = 177u8;
        let src = uniform_raster(ws, hs, value).expect("uniform raster");
        let dst = src.rescale_to(wd, hd).expect("rescale uniform");
        let (min, max) = min_max(dst.as_bytes());
        rp.compare_values(value as f64, min as f64, 1.0);
        rp.compare_values(value as f64, max as f64, 1.0);
        eprintln!("  uniform {ws}x{hs} -> {wd}x{hd}: range [{min}, {max}]");
    }

    // --- Test 5: 4x4 of 100 -> 6x6, every byte written ---
    let src = vec![100u8; 16];
    let mut dest = vec![0xffu8; 36];
    resample(&mut dest, &src, 6, 6, 4, 4).expect("4x4 -> 6x6");
    rp.compare_values(
        1.0,
        dest.iter().all(|&b| (99..=101).contains(&b)) as u32 as f64,
        0.0,
    );
    rp.compare_values(0.0, dest.iter().filter(|&&b| b == 0xff).count() as f64, 0.0);

    // --- Test 6: determinism over a random image ---
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut src = GrayRaster::new(16, 16).expect("source raster");
    rng.fill(src.as_bytes_mut());
    let first = src.rescale_to(22, 22).expect("first rescale");
    let second = src.rescale_to(22, 22).expect("second rescale");
    rp.compare_rasters(&first, &second);

    // --- Test 7: a gradient keeps its structure through an upscale ---
    let grad = gradient_raster(12, 9).expect("gradient raster");
    let up = grad.rescale_to(17, 11).expect("rescale gradient");
    // The corners stay pinned: on an upscale the first and last
    // destination pixels lie entirely within the first and last source
    // pixels, whose ramp values are 0 and 19.
    rp.compare_values(0.0, up.pixel(0, 0) as f64, 0.0);
    rp.compare_values(19.0, up.pixel(16, 10) as f64, 1.0);
    // Row means climb monotonically along the ramp (half a level of
    // slack for per-pixel truncation)
    let means: Vec<f64> = (0..up.height())
        .map(|y| {
            let row = up.row(y);
            row.iter().map(|&v| v as f64).sum::<f64>() / row.len() as f64
        })
        .collect();
    let monotone = means.windows(2).all(|w| w[1] >= w[0] - 0.5);
    rp.compare_values(1.0, monotone as u32 as f64, 0.0);
    rp.compare_values(
        1.0,
        (means[means.len() - 1] - means[0] > 6.0) as u32 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "rescale regression test failed");
}

fn min_max(data: &[u8]) -> (u8, u8) {
    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);
    (min, max)
}
