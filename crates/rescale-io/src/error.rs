//! Error types for rescale-io

use thiserror::Error;

/// Errors that can occur reading or writing rasters
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the expected magic bytes
    #[error("bad magic: expected \"P5\", got {0:?}")]
    BadMagic([u8; 2]),

    /// Malformed header
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),

    /// The maxval field is outside the 8-bit range this crate handles
    #[error("unsupported maxval {0} (must be in 1..=255)")]
    UnsupportedMaxVal(u32),

    /// The pixel payload is shorter than the dimensions require
    #[error("truncated raster data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// Core raster error
    #[error("raster error: {0}")]
    Core(#[from] rescale_core::RescaleError),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
