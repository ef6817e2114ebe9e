//! 15-bit fixed-point arithmetic
//!
//! The resampling engine tracks fractional pixel coverage in unsigned
//! fixed-point values with 15 fractional bits, covering `[0.0, 2.0)` in
//! a `u16`. That range is exactly what the filter needs: "fraction
//! remaining" values live in `(0.0, 1.0]` and the per-axis proportions
//! in `[0.5, 2.0)`.
//!
//! Every product is computed in a `u32` intermediate before the
//! downshift, so no operation relies on wrapping.

use std::ops::{Mul, Sub};

/// Number of fractional bits in a [`Fixed`] value.
pub const FRACTION_BITS: u32 = 15;

/// Unsigned fixed-point value with 15 fractional bits, range `[0.0, 2.0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(u16);

impl Fixed {
    /// Fixed-point `0.0`.
    pub const ZERO: Fixed = Fixed(0);

    /// Fixed-point `1.0`.
    pub const ONE: Fixed = Fixed(1 << FRACTION_BITS);

    /// Convert an integer to fixed point.
    ///
    /// Only `0` and `1` are representable; larger values would not fit
    /// in the `[0.0, 2.0)` range.
    pub const fn from_int(v: u16) -> Fixed {
        debug_assert!(v <= 1);
        Fixed(v << FRACTION_BITS)
    }

    /// Convert a float in `[0.0, 2.0)` to fixed point, truncating.
    ///
    /// Used once per axis to convert the scale proportion; the
    /// truncation here bounds the accuracy of the whole filter.
    pub fn from_f32(v: f32) -> Fixed {
        debug_assert!((0.0..2.0).contains(&v));
        Fixed((v * (1u32 << FRACTION_BITS) as f32) as u16)
    }

    /// The value as an `f32` (diagnostics only).
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1u32 << FRACTION_BITS) as f32
    }

    /// The underlying scaled integer.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Whether this is exactly `0.0`.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by an integer value and shift the product right by
    /// `shift` bits.
    ///
    /// The shift places the binary point where the caller needs it:
    /// 7 when weighting an 8-bit sample (result in 8.8 scale), 15 when
    /// weighting a 16-bit accumulator value (scale preserved).
    pub const fn mul_int(self, v: u16, shift: u32) -> u16 {
        ((self.0 as u32 * v as u32) >> shift) as u16
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    /// Fixed x fixed, through a widened intermediate.
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as u32 * rhs.0 as u32) >> FRACTION_BITS) as u16)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    /// Fraction-remaining bookkeeping; callers guarantee `rhs <= self`.
    fn sub(self, rhs: Fixed) -> Fixed {
        debug_assert!(rhs <= self);
        Fixed(self.0 - rhs.0)
    }
}
