//! rescale-core - Fixed-point resampling engine for 8-bit grayscale rasters
//!
//! This crate implements separable area-weighted resampling of
//! single-channel 8-bit images, entirely in 15-bit fixed-point
//! arithmetic. Each axis may be scaled independently by any factor in
//! `[0.5, 2.0)`.
//!
//! The engine is a streaming two-pass filter: a horizontal pass
//! distributes each source pixel's intensity over the destination
//! columns it overlaps, and a vertical driver accumulates those partial
//! rows until a destination line is complete. Source and destination
//! coordinates advance asynchronously, each carrying a fixed-point
//! "fraction remaining" of the current pixel, so the filter tracks
//! fractional coverage exactly with O(1) state and no floating point in
//! the hot path.
//!
//! # Example
//!
//! ```
//! use rescale_core::GrayRaster;
//!
//! let src = GrayRaster::new(16, 16).unwrap();
//! let dst = src.rescale_to(22, 22).unwrap();
//! assert_eq!(dst.width(), 22);
//! assert_eq!(dst.height(), 22);
//! ```
//!
//! The raw-buffer entry point [`resample`] is also public for callers
//! that manage their own pixel storage.

mod error;
pub mod fixed;
mod line;
mod raster;
mod resample;

pub use error::{RescaleError, Result};
pub use fixed::Fixed;
pub use raster::GrayRaster;
pub use resample::resample;
