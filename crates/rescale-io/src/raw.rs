//! Headerless raw raster I/O
//!
//! The rawest possible form: `width * height` sample bytes, row-major,
//! nothing else. The caller supplies the dimensions on read.

use crate::{IoError, IoResult};
use rescale_core::GrayRaster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a raw raster of known dimensions from a reader.
///
/// # Errors
/// Returns [`IoError::TruncatedData`] if the reader yields fewer than
/// `width * height` bytes; extra trailing bytes are left unread.
pub fn read_raw_from<R: Read>(mut reader: R, width: u32, height: u32) -> IoResult<GrayRaster> {
    let expected = width as usize * height as usize;
    let mut data = Vec::new();
    (&mut reader).take(expected as u64).read_to_end(&mut data)?;
    if data.len() != expected {
        return Err(IoError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }
    Ok(GrayRaster::from_vec(width, height, data)?)
}

/// Write a raster's sample bytes to a writer.
pub fn write_raw_to<W: Write>(raster: &GrayRaster, mut writer: W) -> IoResult<()> {
    writer.write_all(raster.as_bytes())?;
    Ok(())
}

/// Read a raw raster of known dimensions from a file.
pub fn read_raw<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<GrayRaster> {
    let file = File::open(path)?;
    read_raw_from(BufReader::new(file), width, height)
}

/// Write a raster as headerless sample bytes to a file.
pub fn write_raw<P: AsRef<Path>>(raster: &GrayRaster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_raw_to(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}
