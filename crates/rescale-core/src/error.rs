//! Error types for rescale-core

use thiserror::Error;

/// Errors produced by the resampling engine
#[derive(Debug, Error)]
pub enum RescaleError {
    /// A width or height is zero
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The source/destination ratio on one axis is outside `[0.5, 2.0)`
    #[error("scale factor out of range on {axis} axis: {src} -> {dest} (must be in [0.5, 2.0))")]
    ScaleOutOfRange {
        axis: &'static str,
        src: u32,
        dest: u32,
    },

    /// A pixel buffer does not match its stated dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Accumulator allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for rescale operations
pub type Result<T> = std::result::Result<T, RescaleError>;
