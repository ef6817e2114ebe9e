//! PGM (Portable GrayMap) format support
//!
//! Reads and writes binary PGM (P5) with `maxval <= 255`, the
//! self-describing form of the raw rasters this workspace processes.
//! ASCII P2 and 16-bit maxvals are not supported. `#` comments in the
//! header are accepted on read and never produced on write.

use crate::{IoError, IoResult};
use rescale_core::GrayRaster;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a binary PGM image from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5` magic
///
/// # Errors
/// [`IoError::BadMagic`] for non-P5 input, [`IoError::InvalidHeader`]
/// for malformed header fields, [`IoError::UnsupportedMaxVal`] when
/// the samples would not fit in a byte, and
/// [`IoError::TruncatedData`] for a short pixel payload.
pub fn read_pgm_from<R: BufRead>(mut reader: R) -> IoResult<GrayRaster> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    if &magic != b"P5" {
        return Err(IoError::BadMagic(magic));
    }

    let width = read_header_value(&mut reader)?;
    let height = read_header_value(&mut reader)?;
    let maxval = read_header_value(&mut reader)?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedMaxVal(maxval));
    }

    // The single whitespace byte after maxval was consumed as the
    // value's delimiter; the raster payload starts here.
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

/// Write a raster as binary PGM to a writer.
pub fn write_pgm_to<W: Write>(raster: &GrayRaster, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(raster.as_bytes())?;
    Ok(())
}

/// Read a binary PGM image from a file.
pub fn read_pgm<P: AsRef<Path>>(path: P) -> IoResult<GrayRaster> {
    let file = File::open(path)?;
    read_pgm_from(BufReader::new(file))
}

/// Write a raster as binary PGM to a file.
pub fn write_pgm<P: AsRef<Path>>(raster: &GrayRaster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm_to(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse one unsigned decimal header field.
///
/// Skips leading whitespace and `#` comments, accumulates digits, and
/// consumes exactly one trailing delimiter (whitespace or the start of
/// a comment).
fn read_header_value<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    let mut value: Option<u32> = None;
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            return value.ok_or(IoError::InvalidHeader("unexpected end of header"));
        }
        match byte[0] {
            b'0'..=b'9' => {
                let digit = (byte[0] - b'0') as u32;
                let v = value
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or(IoError::InvalidHeader("header value overflow"))?;
                value = Some(v);
            }
            b'#' => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
                if let Some(v) = value {
                    return Ok(v);
                }
            }
            c if c.is_ascii_whitespace() => {
                if let Some(v) = value {
                    return Ok(v);
                }
            }
            _ => return Err(IoError::InvalidHeader("unexpected character")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trip_in_memory() {
        let raster = GrayRaster::from_vec(3, 2, vec![0, 64, 128, 192, 255, 1]).unwrap();
        let mut buf = Vec::new();
        write_pgm_to(&raster, &mut buf).unwrap();
        assert!(buf.starts_with(b"P5\n3 2\n255\n"));

        let back = read_pgm_from(Cursor::new(buf)).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn header_comments_are_skipped() {
        let mut file = b"P5\n# made by hand\n2 # width\n2\n255\n".to_vec();
        file.extend_from_slice(&[10, 20, 30, 40]);
        let raster = read_pgm_from(Cursor::new(file)).unwrap();
        assert_eq!((raster.width(), raster.height()), (2, 2));
        assert_eq!(raster.as_bytes(), &[10, 20, 30, 40]);
    }

    #[test]
    fn rejects_wrong_magic() {
        let err = read_pgm_from(Cursor::new(b"P6\n1 1\n255\n\0".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::BadMagic(_)));
    }

    #[test]
    fn rejects_wide_maxval() {
        let err = read_pgm_from(Cursor::new(b"P5\n1 1\n65535\n\0\0".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedMaxVal(65535)));
    }

    #[test]
    fn short_payload_is_truncated() {
        let err = read_pgm_from(Cursor::new(b"P5\n2 2\n255\n\0\0\0".to_vec())).unwrap_err();
        assert!(matches!(
            err,
            IoError::TruncatedData {
                expected: 4,
                actual: 3,
            }
        ));
    }
}
