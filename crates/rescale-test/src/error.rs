//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while setting up regression tests
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a test raster
    #[error("failed to build test raster: {message}")]
    RasterBuild { message: String },
}

impl TestError {
    pub(crate) fn from_build(err: rescale_core::RescaleError) -> Self {
        TestError::RasterBuild {
            message: err.to_string(),
        }
    }
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
