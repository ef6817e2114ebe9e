//! Rescale - Fixed-point grayscale image rescaler
//!
//! Resamples 8-bit grayscale rasters with an area-weighted filter
//! implemented entirely in 15-bit fixed-point arithmetic. Scale
//! factors may differ per axis and must lie in `[0.5, 2.0)`.
//!
//! # Example
//!
//! ```
//! use rescale::GrayRaster;
//!
//! let src = GrayRaster::new(16, 16).unwrap();
//! let dst = src.rescale_to(22, 22).unwrap();
//! assert_eq!((dst.width(), dst.height()), (22, 22));
//! ```

// Re-export the engine types (primary surface used everywhere)
pub use rescale_core::*;

// Re-export file I/O as a module
pub use rescale_io as io;
