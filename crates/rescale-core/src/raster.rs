//! Single-channel raster container
//!
//! `GrayRaster` is the owned form of the byte buffers the engine works
//! on: 8-bit samples, row-major, one byte per pixel. The I/O layer and
//! the command line trade in this type; the raw-buffer entry point
//! [`resample`](crate::resample) stays available for callers that
//! manage pixel storage themselves.

use crate::error::{RescaleError, Result};
use crate::resample::resample;

/// 8-bit grayscale raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    /// Returns [`RescaleError::InvalidDimension`] if either dimension
    /// is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RescaleError::InvalidDimension { width, height });
        }
        let data = vec![0u8; width as usize * height as usize];
        Ok(GrayRaster {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing pixel buffer.
    ///
    /// # Errors
    /// Returns [`RescaleError::InvalidDimension`] for zero dimensions
    /// and [`RescaleError::BufferSizeMismatch`] if `data` is not
    /// exactly `width * height` bytes.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RescaleError::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(RescaleError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(GrayRaster {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole pixel buffer, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the pixel buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// One row of pixels.
    ///
    /// # Panics
    /// Panics if `y` is out of range.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of range ({})", self.height);
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// The sample at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of range.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Resample into a new raster of the given dimensions.
    ///
    /// Equal dimensions return a plain copy. Otherwise each axis must
    /// scale by a factor in `[0.5, 2.0)`.
    ///
    /// # Example
    /// ```
    /// use rescale_core::GrayRaster;
    ///
    /// let src = GrayRaster::new(162, 210).unwrap();
    /// let dst = src.rescale_to(229, 295).unwrap();
    /// assert_eq!((dst.width(), dst.height()), (229, 295));
    /// ```
    pub fn rescale_to(&self, width: u32, height: u32) -> Result<GrayRaster> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let mut dest = GrayRaster::new(width, height)?;
        resample(
            &mut dest.data,
            &self.data,
            width,
            height,
            self.width,
            self.height,
        )?;
        Ok(dest)
    }
}
