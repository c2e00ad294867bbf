use magint_internals::BigintError;

use crate::{logic::shift::any_bits_below, Bigint};

const F64_FRACTION_BITS: u32 = 52;
const F64_EXPONENT_MASK: u64 = 0x7ff;
const F64_EXPONENT_BIAS: i32 = 1023;

/// The decomposition of an IEEE-754 double into `significand * 2^exponent`
/// with a separate sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleParts {
    /// The significand, including the implicit leading bit for normal values
    pub significand: u64,
    /// The unbiased exponent of the least significant significand bit
    pub exponent: i32,
    /// If the sign bit is set
    pub neg: bool,
    /// If the double is NaN or infinite, in which case the other fields are
    /// meaningless
    pub is_special: bool,
}

impl DoubleParts {
    pub fn from_f64(d: f64) -> Self {
        let bits = d.to_bits();
        let neg = (bits >> 63) != 0;
        let biased = ((bits >> F64_FRACTION_BITS) & F64_EXPONENT_MASK) as i32;
        let fraction = bits & ((1 << F64_FRACTION_BITS) - 1);
        let (significand, exponent) = if biased == 0 {
            // subnormal or zero
            (fraction, 1 - F64_EXPONENT_BIAS - (F64_FRACTION_BITS as i32))
        } else {
            (
                fraction | (1 << F64_FRACTION_BITS),
                biased - F64_EXPONENT_BIAS - (F64_FRACTION_BITS as i32),
            )
        };
        Self {
            significand,
            exponent,
            neg,
            is_special: biased == (F64_EXPONENT_MASK as i32),
        }
    }
}

/// Returns `2^e` for `e` in the normal exponent range
fn pow2(e: usize) -> f64 {
    debug_assert!(e <= (F64_EXPONENT_BIAS as usize));
    f64::from_bits(((e as u64) + (F64_EXPONENT_BIAS as u64)) << F64_FRACTION_BITS)
}

/// # Float conversion
impl Bigint {
    /// Converts decomposed double parts into a `Bigint`, truncating toward
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns `SpecialDouble` if `parts.is_special`
    pub fn from_double_parts(parts: DoubleParts) -> Result<Self, BigintError> {
        if parts.is_special {
            return Err(BigintError::SpecialDouble)
        }
        let mut significand = parts.significand;
        let mut exponent = parts.exponent;
        if exponent <= 0 {
            significand = significand.checked_shr(exponent.unsigned_abs()).unwrap_or(0);
            exponent = 0;
        } else if (exponent <= 10) && (significand.leading_zeros() >= (exponent as u32)) {
            significand <<= exponent;
            exponent = 0;
        }
        let x = Self::from_u64(significand).with_sign(parts.neg);
        Ok(x.shl(exponent as usize))
    }

    /// Converts `d` into a `Bigint`, truncating toward zero. Values with
    /// `|d| < 1.0`, including subnormals, are zero.
    ///
    /// # Errors
    ///
    /// Returns `SpecialDouble` if `d` is NaN or infinite
    ///
    /// ```
    /// use magint_core::prelude::*;
    ///
    /// assert_eq!(Bigint::from_f64(-2.75).unwrap(), Bigint::from_i64(-2));
    /// assert_eq!(Bigint::from_f64(0.5).unwrap(), Bigint::zero());
    /// assert_eq!(Bigint::from_f64(f64::NAN), Err(BigintError::SpecialDouble));
    /// assert_eq!(Bigint::from_f64(1e20).unwrap().to_decimal_string(), "100000000000000000000");
    /// ```
    pub fn from_f64(d: f64) -> Result<Self, BigintError> {
        if (-1.0 < d) && (d < 1.0) {
            return Ok(Self::zero())
        }
        Self::from_double_parts(DoubleParts::from_f64(d))
    }

    /// Converts `self` into the nearest double, rounding ties to even. The
    /// result is infinite if the magnitude is too large.
    fn to_f64_unchecked(&self) -> f64 {
        let bits = self.bit_len();
        let mag = if bits <= 64 {
            self.magnitude_u64() as f64
        } else if bits > ((F64_EXPONENT_BIAS as usize) + 1) {
            f64::INFINITY
        } else {
            // keep the top 64 bits and fold every discarded bit into a sticky
            // bit, the `u64` to `f64` cast then rounds correctly
            let s = bits - 64;
            let top = self.abs().shr(s).magnitude_u64();
            let sticky = any_bits_below(&self.digits, s) as u64;
            ((top | sticky) as f64) * pow2(s)
        };
        if self.neg {
            -mag
        } else {
            mag
        }
    }

    /// Returns if `self` rounds to a finite double
    pub fn fits_in_f64(&self) -> bool {
        self.to_f64_unchecked().is_finite()
    }

    /// Returns the nearest double to `self` with ties rounding to even, or
    /// `None` if it would be infinite
    pub fn to_f64(&self) -> Option<f64> {
        let x = self.to_f64_unchecked();
        if x.is_finite() {
            Some(x)
        } else {
            None
        }
    }
}
