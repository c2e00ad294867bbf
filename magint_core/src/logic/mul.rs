use core::cmp::min;

use magint_internals::{
    widen_mul_add, BigintError, Chunk, DoubleChunk, DIGIT_BITS, DIGIT_MAX, MAX_COMBA_DIGITS,
};

use crate::{Bigint, DigitBuf};

/// Multiplies a magnitude by a single digit into a new buffer with room for
/// the final carry
pub(crate) fn short_mul_digits(x: &[Chunk], digit: Chunk) -> DigitBuf {
    let mut buf = DigitBuf::allocate(x.len() + 1);
    let res = buf.as_mut_slice();
    let mut carry = 0;
    for i in 0..x.len() {
        (res[i], carry) = widen_mul_add(x[i], digit, carry);
    }
    res[x.len()] = carry;
    buf
}

/// Assigns `buf * mul + add` to `buf`, growing it by a digit if needed
pub(crate) fn short_mul_add_assign(buf: &mut DigitBuf, mul: Chunk, add: Chunk) {
    let mut carry = add;
    for d in buf.as_mut_slice() {
        (*d, carry) = widen_mul_add(*d, mul, carry);
    }
    if carry != 0 {
        buf.push(carry);
    }
}

/// Comba (column-wise) multiplication of two nonempty magnitudes. Each column
/// of partial products is accumulated in a `DoubleChunk` before one carry
/// propagation, which is only sound while the shorter operand has at most
/// `MAX_COMBA_DIGITS` digits.
pub(crate) fn comba_digits(lhs: &[Chunk], rhs: &[Chunk]) -> Result<DigitBuf, BigintError> {
    debug_assert!(!lhs.is_empty() && !rhs.is_empty());
    let shorter = min(lhs.len(), rhs.len());
    if shorter > MAX_COMBA_DIGITS {
        return Err(BigintError::UnsupportedMagnitude {
            len: shorter,
            max: MAX_COMBA_DIGITS,
        })
    }
    let res_len = lhs.len() + rhs.len();
    let mut buf = DigitBuf::allocate(res_len);
    let res = buf.as_mut_slice();
    let mut acc: DoubleChunk = 0;
    for i in 0..res_len {
        let lhs_start = min(lhs.len() - 1, i);
        let rhs_start = i - lhs_start;
        // `rhs_start` reaches `rhs.len()` only in the final column
        let iterations = min(rhs.len() - rhs_start, lhs_start + 1);
        for j in 0..iterations {
            acc += (lhs[lhs_start - j] as DoubleChunk) * (rhs[rhs_start + j] as DoubleChunk);
        }
        res[i] = (acc as Chunk) & DIGIT_MAX;
        acc >>= DIGIT_BITS;
    }
    debug_assert_eq!(acc, 0);
    Ok(buf)
}

/// # Multiplication
impl Bigint {
    /// Returns `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMagnitude` if both operands have more than
    /// `MAX_COMBA_DIGITS` digits
    pub fn mul(&self, rhs: &Self) -> Result<Self, BigintError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero())
        }
        let mut buf = comba_digits(&self.digits, &rhs.digits)?;
        buf.set_neg(self.neg != rhs.neg);
        Ok(buf.finish())
    }

    /// Returns `self * digit` where `digit` is a single digit. Returns `None`
    /// if `digit > DIGIT_MAX`.
    pub fn mul_digit(&self, digit: Chunk) -> Option<Self> {
        if digit > DIGIT_MAX {
            return None
        }
        let mut buf = short_mul_digits(&self.digits, digit);
        buf.set_neg(self.neg);
        Some(buf.finish())
    }
}
