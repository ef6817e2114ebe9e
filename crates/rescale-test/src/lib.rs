//! rescale-test - Regression test framework for the rescale workspace
//!
//! Provides [`RegParams`], a small harness that numbers comparisons
//! within a named regression test, records failures, and reports an
//! overall verdict, plus helpers for building test rasters.
//!
//! # Usage
//!
//! ```
//! use rescale_test::{RegParams, uniform_raster};
//!
//! let mut rp = RegParams::new("doc");
//! let r = uniform_raster(4, 4, 128).unwrap();
//! rp.compare_values(128.0, r.pixel(0, 0) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use rescale_core::GrayRaster;

/// Build a raster with every sample set to `value`.
pub fn uniform_raster(width: u32, height: u32, value: u8) -> TestResult<GrayRaster> {
    let mut raster = GrayRaster::new(width, height).map_err(TestError::from_build)?;
    raster.as_bytes_mut().fill(value);
    Ok(raster)
}

/// Build a raster with a diagonal gradient, wrapping at 256.
///
/// Gives every row and column distinct structure, which makes
/// positional mix-ups visible in comparisons.
pub fn gradient_raster(width: u32, height: u32) -> TestResult<GrayRaster> {
    let mut raster = GrayRaster::new(width, height).map_err(TestError::from_build)?;
    let w = width as usize;
    for (i, v) in raster.as_bytes_mut().iter_mut().enumerate() {
        *v = ((i / w + i % w) % 256) as u8;
    }
    Ok(raster)
}
