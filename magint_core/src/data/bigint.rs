use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use magint_internals::{Chunk, CHUNK_BITS, DIGIT_BITS, DIGIT_MAX};

use crate::DigitBuf;

/// An arbitrary precision integer in sign-magnitude representation.
///
/// The magnitude is stored as a little-endian slice of digits, each holding
/// `DIGIT_BITS` significant bits in a `Chunk`. A `Bigint` is always in
/// canonical form:
///
/// - the most significant digit is nonzero (the digits are "clamped"), so
///   zero has no digits
/// - zero is never negative
/// - no digit has bits set above `DIGIT_BITS`
///
/// Because every value is canonical, structural equality is numeric equality.
/// A `Bigint` is immutable once published, operations allocate and return new
/// values. Use `DigitBuf` to build a value digit by digit.
///
/// ```
/// use magint_core::prelude::*;
///
/// let x: Bigint = "-123456789012345678901234567890".parse().unwrap();
/// let y = Bigint::from_i64(-7);
/// let (quo, rem) = x.divide_remainder(&y).unwrap();
/// assert_eq!(quo.to_decimal_string(), "17636684144620811271604938270");
/// assert!(rem.is_zero());
/// assert_eq!(x.to_hex_string(), "-0x18ee90ff6c373e0ee4e3f0ad2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bigint {
    pub(crate) neg: bool,
    pub(crate) digits: Box<[Chunk]>,
}

/// # Basic functions
impl Bigint {
    /// Returns zero, which has no digits and is never negative
    #[inline]
    pub fn zero() -> Self {
        Self {
            neg: false,
            digits: Box::new([]),
        }
    }

    /// Returns one
    #[inline]
    pub fn one() -> Self {
        Self {
            neg: false,
            digits: Box::new([1]),
        }
    }

    /// Returns negative one
    #[inline]
    pub fn minus_one() -> Self {
        Self {
            neg: true,
            digits: Box::new([1]),
        }
    }

    /// Creates a `Bigint` from a sign and little-endian digits. Non-significant
    /// zero digits are clamped away and a zero result is made non-negative.
    /// Returns `None` if any digit has bits set above `DIGIT_BITS`.
    pub fn from_digits(neg: bool, digits: &[Chunk]) -> Option<Self> {
        if digits.iter().any(|d| *d > DIGIT_MAX) {
            return None
        }
        Some(DigitBuf::from_slice(neg, digits).finish())
    }

    /// Returns the number of digits in the magnitude. This is 0 only for
    /// zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns the little-endian digits of the magnitude
    #[inline]
    pub fn digits(&self) -> &[Chunk] {
        &self.digits
    }

    /// Returns digit `i` of the magnitude, or 0 if `i >= self.len()`
    #[inline]
    pub fn digit(&self, i: usize) -> Chunk {
        self.digits.get(i).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Returns the number of significant bits in the magnitude
    pub fn bit_len(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(msd) => {
                (self.len() - 1) * DIGIT_BITS + (CHUNK_BITS - (msd.leading_zeros() as usize))
            }
        }
    }

    /// Returns `-self`
    pub fn negate(&self) -> Self {
        self.clone().with_sign(!self.neg)
    }

    /// Returns `|self|`
    pub fn abs(&self) -> Self {
        self.clone().with_sign(false)
    }

    /// Sets the sign, keeping zero non-negative
    #[inline]
    pub(crate) fn with_sign(mut self, neg: bool) -> Self {
        self.neg = neg && !self.is_zero();
        self
    }

    /// Copies the magnitude into a mutable builder with `extra` zero digits
    /// appended
    pub(crate) fn to_digit_buf(&self, extra: usize) -> DigitBuf {
        let mut v = Vec::with_capacity(self.len() + extra);
        v.extend_from_slice(&self.digits);
        v.resize(self.len() + extra, 0);
        DigitBuf::from_vec(self.neg, v)
    }

    /// Panics if `self` is not canonical. This can only fail if there is a bug
    /// in an operation.
    #[track_caller]
    pub fn assert_invariants(&self) {
        if let Some(msd) = self.digits.last() {
            if *msd == 0 {
                panic!("{self:?} is not clamped")
            }
        } else if self.neg {
            panic!("negative zero")
        }
        if self.digits.iter().any(|d| *d > DIGIT_MAX) {
            panic!("{self:?} has a digit with bits above `DIGIT_BITS`")
        }
    }
}

impl Default for Bigint {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for Bigint {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.digits[..]);
        self.digits = Box::new([]);
        self.neg = false;
    }
}
