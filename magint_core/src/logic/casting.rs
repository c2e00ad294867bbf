use magint_internals::{BigintError, Chunk, DIGIT_BITS, DIGIT_MAX, SMALL_INT_MAX, SMALL_INT_MIN};

use crate::{Bigint, DigitBuf};

/// Returns if the clamped magnitude `digits` is at most `limit`. This walks
/// the digits from least significant upwards, consuming `limit` one digit at
/// a time and tracking whether the magnitude is greater than the limit in the
/// digits seen so far.
fn fits_magnitude(digits: &[Chunk], mut limit: u64) -> bool {
    let len = digits.len();
    if len == 0 {
        return true
    }
    let mut greater = false;
    for &d in &digits[..(len - 1)] {
        let limit_digit = (limit & (DIGIT_MAX as u64)) as Chunk;
        if limit_digit < d {
            greater = true;
        } else if limit_digit > d {
            greater = false;
        }
        limit >>= DIGIT_BITS;
        if limit == 0 {
            // the nonzero most significant digit is still left
            return false
        }
    }
    let msd = digits[len - 1] as u64;
    if limit > msd {
        true
    } else if limit < msd {
        false
    } else {
        !greater
    }
}

/// # Machine integer conversion
impl Bigint {
    pub fn from_u64(x: u64) -> Self {
        let mut buf = DigitBuf::allocate(0);
        let mut x = x;
        while x != 0 {
            buf.push((x as Chunk) & DIGIT_MAX);
            x >>= DIGIT_BITS;
        }
        buf.finish()
    }

    pub fn from_i64(x: i64) -> Self {
        Self::from_u64(x.unsigned_abs()).with_sign(x < 0)
    }

    /// Creates a `Bigint` from a value of the host's small integer type.
    /// Returns `None` if `x` is outside of `SMALL_INT_MIN..=SMALL_INT_MAX`.
    pub fn from_small_int(x: i64) -> Option<Self> {
        if (x < SMALL_INT_MIN) || (x > SMALL_INT_MAX) {
            return None
        }
        Some(Self::from_i64(x))
    }

    /// Returns the magnitude as a `u64`, which must fit
    pub(crate) fn magnitude_u64(&self) -> u64 {
        debug_assert!(self.bit_len() <= 64);
        let mut x: u64 = 0;
        for d in self.digits.iter().rev() {
            x = (x << DIGIT_BITS) | (*d as u64);
        }
        x
    }

    fn fits_signed(&self, min: i64, max: i64) -> bool {
        if self.neg {
            fits_magnitude(&self.digits, min.unsigned_abs())
        } else {
            fits_magnitude(&self.digits, max as u64)
        }
    }

    /// Returns if `self` is in `SMALL_INT_MIN..=SMALL_INT_MAX`
    pub fn fits_in_small_int(&self) -> bool {
        self.fits_signed(SMALL_INT_MIN, SMALL_INT_MAX)
    }

    pub fn fits_in_i64(&self) -> bool {
        self.fits_signed(i64::MIN, i64::MAX)
    }

    pub fn fits_in_u64(&self) -> bool {
        !self.neg && (self.bit_len() <= 64)
    }

    pub fn to_i64(&self) -> Option<i64> {
        if !self.fits_in_i64() {
            return None
        }
        let x = self.magnitude_u64() as i64;
        // `i64::MIN` wraps to itself
        Some(if self.neg { x.wrapping_neg() } else { x })
    }

    pub fn to_small_int(&self) -> Option<i64> {
        if !self.fits_in_small_int() {
            return None
        }
        self.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        if !self.fits_in_u64() {
            return None
        }
        Some(self.magnitude_u64())
    }
}

macro_rules! from_prim {
    ($($ty:ident $fn:ident $cast:ident);*;) => {
        $(
            impl From<$ty> for Bigint {
                fn from(x: $ty) -> Self {
                    Self::$fn(x as $cast)
                }
            }
        )*
    };
}

from_prim!(
    u8 from_u64 u64;
    u16 from_u64 u64;
    u32 from_u64 u64;
    u64 from_u64 u64;
    usize from_u64 u64;
    i8 from_i64 i64;
    i16 from_i64 i64;
    i32 from_i64 i64;
    i64 from_i64 i64;
    isize from_i64 i64;
);

impl TryFrom<&Bigint> for i64 {
    type Error = BigintError;

    fn try_from(x: &Bigint) -> Result<Self, BigintError> {
        x.to_i64().ok_or(BigintError::Overflow)
    }
}

impl TryFrom<&Bigint> for u64 {
    type Error = BigintError;

    fn try_from(x: &Bigint) -> Result<Self, BigintError> {
        x.to_u64().ok_or(BigintError::Overflow)
    }
}
