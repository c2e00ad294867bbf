use core::cmp::Ordering;

use magint_internals::{
    widen_mul_add, BigintError, Chunk, DoubleChunk, CHUNK_BITS, DIGIT_BITS, DIGIT_MAX,
};

use crate::{
    logic::{
        cmp::unsigned_cmp_nonclamped,
        mul::short_mul_digits,
        shift::{shl_digits, shr_digits},
        sum::{add_assign_digits, sub_assign_digits},
    },
    Bigint, DigitBuf,
};

/// Divides a magnitude in place by a single nonzero digit and returns the
/// remainder
pub(crate) fn short_divide_assign(x: &mut [Chunk], div: Chunk) -> Chunk {
    debug_assert!(div != 0);
    let div = div as DoubleChunk;
    let mut rem: DoubleChunk = 0;
    for d in x.iter_mut().rev() {
        let duo = (rem << DIGIT_BITS) | (*d as DoubleChunk);
        *d = (duo / div) as Chunk;
        rem = duo % div;
    }
    rem as Chunk
}

/// Multiplies a short divisor of at most two digits by a trial quotient
/// digit, producing three digits
fn mul_short_divisor(short_divisor: [Chunk; 2], q: Chunk) -> [Chunk; 3] {
    let (lo, carry) = widen_mul_add(short_divisor[0], q, 0);
    let (mid, hi) = widen_mul_add(short_divisor[1], q, carry);
    [lo, mid, hi]
}

/// Long division of clamped magnitudes with `duo > div` and `div` nonzero.
/// Returns the unclamped quotient and remainder magnitudes.
fn long_divide(duo: &[Chunk], div: &[Chunk]) -> (DigitBuf, DigitBuf) {
    // normalize so that the top bit of the divisor's most significant digit
    // is set, which bounds how far off the two-digit quotient estimates are
    let divisor_msd = div[div.len() - 1];
    let norm = DIGIT_BITS - (CHUNK_BITS - (divisor_msd.leading_zeros() as usize));
    let mut divisor = shl_digits(div, norm);
    divisor.clamp();
    let mut dividend = shl_digits(duo, norm);
    dividend.clamp();
    let divisor: &[Chunk] = &divisor;
    let rem = dividend.as_mut_slice();
    let n = divisor.len();
    let m = rem.len();
    debug_assert_eq!(n, div.len());
    debug_assert!(m >= n);

    let mut quotient = DigitBuf::allocate(m - n + 1);
    let quo = quotient.as_mut_slice();

    // the most significant quotient digit by repeated subtraction of the
    // divisor shifted up by `m - n` digits
    let mut q = 0;
    while unsigned_cmp_nonclamped(&rem[(m - n)..], divisor) != Ordering::Less {
        sub_assign_digits(&mut rem[(m - n)..], divisor);
        q += 1;
    }
    quo[m - n] = q;

    let first_divisor_digit = divisor[n - 1];
    let short_divisor = [if n >= 2 { divisor[n - 2] } else { 0 }, divisor[n - 1]];
    for i in (n..m).rev() {
        let dividend_digit = rem[i];
        let mut q = if dividend_digit == first_divisor_digit {
            DIGIT_MAX
        } else {
            let duo =
                ((dividend_digit as DoubleChunk) << DIGIT_BITS) | (rem[i - 1] as DoubleChunk);
            let q = duo / (first_divisor_digit as DoubleChunk);
            if q > (DIGIT_MAX as DoubleChunk) {
                DIGIT_MAX
            } else {
                q as Chunk
            }
        };
        // refine the estimate against the top three digits of the remainder
        let target = [if i >= 2 { rem[i - 2] } else { 0 }, rem[i - 1], rem[i]];
        while unsigned_cmp_nonclamped(&mul_short_divisor(short_divisor, q), &target)
            == Ordering::Greater
        {
            q -= 1;
        }
        // the estimate can still be one too large
        let product = short_mul_digits(divisor, q);
        let window = &mut rem[(i - n)..=i];
        if sub_assign_digits(window, &product) != 0 {
            q -= 1;
            add_assign_digits(window, divisor);
        }
        quo[i - n] = q;
    }

    let remainder = shr_digits(rem, norm);
    (quotient, remainder)
}

/// # Division
impl Bigint {
    /// Truncated division of `self` by `div`, returning the quotient and
    /// remainder. The quotient rounds toward zero, and the remainder has the
    /// sign of `self` with `|rem| < |div|`, so `self == quo * div + rem`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `div` is zero
    pub fn divide_remainder(&self, div: &Self) -> Result<(Self, Self), BigintError> {
        if div.is_zero() {
            return Err(BigintError::DivisionByZero)
        }
        let quo_neg = self.neg != div.neg;
        match self.unsigned_compare(div) {
            Ordering::Less => return Ok((Self::zero(), self.clone())),
            Ordering::Equal => return Ok((Self::one().with_sign(quo_neg), Self::zero())),
            Ordering::Greater => (),
        }
        let (mut quo, mut rem) = long_divide(&self.digits, &div.digits);
        quo.set_neg(quo_neg);
        rem.set_neg(self.neg);
        Ok((quo.finish(), rem.finish()))
    }

    /// Returns the truncated quotient of `self / div`
    pub fn divide(&self, div: &Self) -> Result<Self, BigintError> {
        Ok(self.divide_remainder(div)?.0)
    }

    /// Returns the truncated remainder of `self / div`, which has the sign of
    /// `self`
    pub fn remainder(&self, div: &Self) -> Result<Self, BigintError> {
        Ok(self.divide_remainder(div)?.1)
    }

    /// Returns the same value as `remainder`. Note that this is not a
    /// Euclidean or floored modulo, negative dividends produce negative
    /// results.
    pub fn modulo(&self, div: &Self) -> Result<Self, BigintError> {
        self.remainder(div)
    }
}
