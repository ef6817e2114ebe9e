//! Whole-image resampling driver
//!
//! Drives the vertical axis of the separable filter: source and
//! destination row indices advance asynchronously, each carrying a
//! fixed-point fraction of the current row not yet consumed, exactly
//! mirroring the horizontal walk one dimension up. Every (source row,
//! destination row) overlap triggers one horizontal pass weighted by
//! that overlap; when a destination row's vertical coverage is
//! exhausted the accumulator is truncated to 8 bits and written out.

use crate::error::{RescaleError, Result};
use crate::fixed::Fixed;
use crate::line::resample_line;

/// Largest allowed ratio between a source and destination dimension.
/// The single-neighborhood overlap walk is only valid below this.
const MAX_SCALE: f32 = 2.0;

/// Resample an 8-bit grayscale raster.
///
/// Both buffers are row-major, one byte per pixel. On success every
/// byte of `dest` is written exactly once, in row-major order; on error
/// `dest` is untouched. Equal source and destination dimensions are a
/// successful no-op (no copy is performed).
///
/// # Arguments
/// * `dest` - Destination buffer, exactly `wd * hd` bytes
/// * `src` - Source buffer, exactly `ws * hs` bytes
/// * `wd`, `hd` - Destination width and height
/// * `ws`, `hs` - Source width and height
///
/// # Errors
/// * [`RescaleError::InvalidDimension`] if any dimension is zero
/// * [`RescaleError::BufferSizeMismatch`] if a buffer length disagrees
///   with its dimensions
/// * [`RescaleError::ScaleOutOfRange`] if either axis scales by a
///   factor outside `[0.5, 2.0)`
/// * [`RescaleError::AllocationFailed`] if the accumulator cannot be
///   allocated
pub fn resample(dest: &mut [u8], src: &[u8], wd: u32, hd: u32, ws: u32, hs: u32) -> Result<()> {
    if ws == 0 || hs == 0 {
        return Err(RescaleError::InvalidDimension {
            width: ws,
            height: hs,
        });
    }
    if wd == 0 || hd == 0 {
        return Err(RescaleError::InvalidDimension {
            width: wd,
            height: hd,
        });
    }

    let src_len = ws as usize * hs as usize;
    if src.len() != src_len {
        return Err(RescaleError::BufferSizeMismatch {
            expected: src_len,
            actual: src.len(),
        });
    }
    let dest_len = wd as usize * hd as usize;
    if dest.len() != dest_len {
        return Err(RescaleError::BufferSizeMismatch {
            expected: dest_len,
            actual: dest.len(),
        });
    }

    // Identical dimensions: nothing to do. Copying is the caller's
    // business if wanted.
    if ws == wd && hs == hd {
        return Ok(());
    }

    check_scale("x", ws, wd)?;
    check_scale("y", hs, hd)?;

    // Vertical accumulator, one entry per destination column. Partial
    // destination rows live here across horizontal passes.
    let mut acc: Vec<u16> = Vec::new();
    acc.try_reserve_exact(wd as usize)
        .map_err(|_| RescaleError::AllocationFailed)?;
    acc.resize(wd as usize, 0);

    // Per-axis proportions: how many destination units one source
    // pixel spans. The destination side is by definition 1.0.
    let pws = Fixed::from_f32(wd as f32 / ws as f32);
    let pwd = Fixed::ONE;
    let phs = Fixed::from_f32(hd as f32 / hs as f32);
    let phd = Fixed::ONE;

    let ws = ws as usize;
    let hs = hs as usize;
    let wd = wd as usize;
    let hd = hd as usize;

    let mut ys = 0usize;
    let mut yd = 0usize;
    let mut fhs = phs;
    let mut fhd = phd;

    // 'ys' and 'yd' advance in a stagger: sometimes one, sometimes the
    // other, sometimes both, governed by whichever fraction runs out.
    while yd < hd {
        let fh = fhs.min(fhd);

        // Proportion truncation can exhaust the source a fraction
        // early; the last row absorbs the residue.
        let row = ys.min(hs - 1) * ws;
        let consumed = resample_line(&mut acc, &src[row..row + ws], pws, pwd, fh);
        debug_assert!(consumed.abs_diff(ws) <= 1);

        fhs = fhs - fh;
        if fhs.is_zero() {
            fhs = phs;
            ys += 1;
        }

        fhd = fhd - fh;
        if fhd.is_zero() {
            fhd = phd;

            // Destination row complete: truncate the accumulated
            // 16-bit values back to 8-bit samples and write the row.
            let out = &mut dest[yd * wd..(yd + 1) * wd];
            for (d, a) in out.iter_mut().zip(&acc) {
                *d = (a >> 8) as u8;
            }
            acc.fill(0);
            yd += 1;
        }
    }

    Ok(())
}

/// Reject axis ratios at or beyond [`MAX_SCALE`] in either direction.
fn check_scale(axis: &'static str, src: u32, dest: u32) -> Result<()> {
    let s = src as f32;
    let d = dest as f32;
    if s / d >= MAX_SCALE || d / s >= MAX_SCALE {
        return Err(RescaleError::ScaleOutOfRange { axis, src, dest });
    }
    Ok(())
}
