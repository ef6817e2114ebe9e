//! Horizontal resampling of one scanline
//!
//! One call distributes a single source row over the destination
//! columns, weighted by the vertical coverage this row contributes to
//! the destination line under construction. Modeling both axes as
//! continuous intervals partitioned into unit-width source cells and
//! proportion-width destination cells, each accumulated term is the
//! exact overlap of one source cell with one destination cell, so the
//! pass performs an implicit box filter in O(ws + wd) steps with O(1)
//! extra state.

use crate::fixed::Fixed;

/// Resample one source row into the vertical accumulator.
///
/// # Arguments
/// * `acc` - Vertical accumulator, one entry per destination column;
///   entries are increased, never reset here
/// * `src` - One row of source pixels
/// * `pws` - Source width proportion (`wd / ws`, in `[0.5, 2.0)`)
/// * `pwd` - Destination width proportion (always `1.0`)
/// * `fh` - Vertical coverage weight of this row (`<= 1.0`)
///
/// # Returns
/// The source column index after the walk. When the proportion is
/// exactly representable this equals the source width; truncation in
/// the proportion can leave it off by one (reads are clamped to the
/// last column, so the residue never walks off the row).
pub(crate) fn resample_line(
    acc: &mut [u16],
    src: &[u8],
    pws: Fixed,
    pwd: Fixed,
    fh: Fixed,
) -> usize {
    let wd = acc.len();
    let ws = src.len();

    // Horizontal accumulator: contributions of source pixels to the
    // destination pixel currently being composed, in 8.8 scale.
    let mut ax: u16 = 0;

    let mut xs = 0usize;
    let mut xd = 0usize;

    // Fractions of the current source / destination pixel not yet
    // consumed. Both are strictly positive at the top of the loop.
    let mut fws = pws;
    let mut fwd = pwd;

    while xd < wd {
        // The lesser of the two remaining fractions is how much of this
        // source pixel maps onto this destination pixel.
        let fw = fws.min(fwd);

        ax += fw.mul_int(src[xs.min(ws - 1)] as u16, 7);

        fws = fws - fw;
        if fws.is_zero() {
            // Source pixel fully consumed; move to the next.
            fws = pws;
            xs += 1;
        }

        fwd = fwd - fw;
        if fwd.is_zero() {
            // Destination pixel horizontally complete for this row:
            // weight it by the vertical coverage and bank it.
            fwd = pwd;
            acc[xd] += fh.mul_int(ax, 15);
            ax = 0;
            xd += 1;
        }
    }

    xs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proportion(ws: u32, wd: u32) -> Fixed {
        Fixed::from_f32(wd as f32 / ws as f32)
    }

    #[test]
    fn upscale_consumes_whole_row() {
        // 4 -> 6 with full vertical weight; 1.5 is exact in fixed point
        let src = [100u8; 4];
        let mut acc = [0u16; 6];
        let xs = resample_line(&mut acc, &src, proportion(4, 6), Fixed::ONE, Fixed::ONE);
        assert_eq!(xs, 4);
        // A constant row accumulates to the constant at 8.8 scale
        assert!(acc.iter().all(|&a| a == 100 << 8));
    }

    #[test]
    fn downscale_consumes_whole_row() {
        let src = [200u8; 6];
        let mut acc = [0u16; 4];
        let xs = resample_line(&mut acc, &src, proportion(6, 4), Fixed::ONE, Fixed::ONE);
        assert_eq!(xs, 6);
        for &a in &acc {
            // 2/3 is inexact; each banked term truncates by at most one
            let diff = (200u16 << 8).abs_diff(a);
            assert!(diff < 16, "accumulator {a} too far from {}", 200u16 << 8);
        }
    }

    #[test]
    fn identity_proportion_copies_samples() {
        let src = [10u8, 20, 30, 40, 250];
        let mut acc = [0u16; 5];
        let xs = resample_line(&mut acc, &src, Fixed::ONE, Fixed::ONE, Fixed::ONE);
        assert_eq!(xs, 5);
        for (a, s) in acc.iter().zip(&src) {
            assert_eq!(*a, (*s as u16) << 8);
        }
    }

    #[test]
    fn half_weight_halves_contribution() {
        let src = [100u8; 4];
        let mut acc = [0u16; 4];
        let half = Fixed::from_f32(0.5);
        resample_line(&mut acc, &src, Fixed::ONE, Fixed::ONE, half);
        resample_line(&mut acc, &src, Fixed::ONE, Fixed::ONE, half);
        // Two half-weight passes of the same row equal one full pass
        assert!(acc.iter().all(|&a| a == 100 << 8));
    }

    #[test]
    fn exact_upscale_splits_pixels() {
        // 2 -> 3: destination pixels cover [0, 2/3), [2/3, 4/3), [4/3, 2)
        let src = [120u8, 60];
        let mut acc = [0u16; 3];
        let xs = resample_line(&mut acc, &src, proportion(2, 3), Fixed::ONE, Fixed::ONE);
        assert_eq!(xs, 2);
        assert_eq!(acc[0], 120 << 8);
        // Middle pixel: half of each source pixel
        assert_eq!(acc[1], (60 << 8) + (30 << 8));
        assert_eq!(acc[2], 60 << 8);
    }
}
