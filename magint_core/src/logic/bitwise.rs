use core::cmp::max;

use magint_internals::{Chunk, DIGIT_MAX};

use crate::{
    logic::sum::{inc_digits, sub_assign_digits},
    Bigint, DigitBuf,
};

/// A view of the conceptually infinite, sign extended two's complement digits
/// of a sign-magnitude value. Negative values are `!|x| + 1`, which is
/// computed lazily per digit using the position of the least significant
/// nonzero digit (below it the digits are zero, at it the digit is negated,
/// and above it the digits are inverted).
#[derive(Debug, Clone, Copy)]
struct TwosComplement<'a> {
    digits: &'a [Chunk],
    neg: bool,
    lowest_nonzero: usize,
}

impl<'a> TwosComplement<'a> {
    fn new(x: &'a Bigint) -> Self {
        let lowest_nonzero = x
            .digits
            .iter()
            .position(|d| *d != 0)
            .unwrap_or(x.digits.len());
        Self {
            digits: &x.digits,
            neg: x.neg,
            lowest_nonzero,
        }
    }

    fn sign_digit(&self) -> Chunk {
        if self.neg {
            DIGIT_MAX
        } else {
            0
        }
    }

    fn digit(&self, i: usize) -> Chunk {
        if i >= self.digits.len() {
            self.sign_digit()
        } else if !self.neg {
            self.digits[i]
        } else if i < self.lowest_nonzero {
            0
        } else if i == self.lowest_nonzero {
            (!(self.digits[i] - 1)) & DIGIT_MAX
        } else {
            (!self.digits[i]) & DIGIT_MAX
        }
    }
}

/// Applies `f` digitwise to the two's complement forms of `lhs` and `rhs` and
/// converts back into sign-magnitude form. The result has one more digit than
/// the longest input so that the top digit is pure sign extension.
fn bitwise<F: Fn(Chunk, Chunk) -> Chunk>(lhs: &Bigint, rhs: &Bigint, f: F) -> Bigint {
    let x = TwosComplement::new(lhs);
    let y = TwosComplement::new(rhs);
    let len = max(lhs.len(), rhs.len()) + 1;
    let neg = (f(x.sign_digit(), y.sign_digit()) & 1) != 0;
    let mut buf = DigitBuf::allocate(len);
    let res = buf.as_mut_slice();
    for i in 0..len {
        res[i] = f(x.digit(i), y.digit(i)) & DIGIT_MAX;
    }
    if neg {
        for d in res.iter_mut() {
            *d = (!*d) & DIGIT_MAX;
        }
        // cannot carry out since the top digit was all ones before inversion
        let carry = inc_digits(res);
        debug_assert!(!carry);
        buf.set_neg(true);
    }
    buf.finish()
}

/// # Bitwise
///
/// These operations act as if the values were two's complement integers with
/// infinite sign extension.
impl Bigint {
    /// Returns digit `i` of the infinite two's complement form of `self`
    pub fn twos_complement_digit(&self, i: usize) -> Chunk {
        TwosComplement::new(self).digit(i)
    }

    /// Returns `!self`, which is `-self - 1`
    pub fn bit_not(&self) -> Self {
        if self.neg {
            // |self| >= 1, so this is `|self| - 1`
            let mut buf = self.to_digit_buf(0);
            buf.set_neg(false);
            let borrow = sub_assign_digits(buf.as_mut_slice(), &[1]);
            debug_assert_eq!(borrow, 0);
            buf.finish()
        } else {
            let mut buf = self.to_digit_buf(1);
            inc_digits(buf.as_mut_slice());
            buf.set_neg(true);
            buf.finish()
        }
    }

    /// Returns `self & rhs`
    pub fn bit_and(&self, rhs: &Self) -> Self {
        bitwise(self, rhs, |a, b| a & b)
    }

    /// Returns `self | rhs`
    pub fn bit_or(&self, rhs: &Self) -> Self {
        bitwise(self, rhs, |a, b| a | b)
    }

    /// Returns `self ^ rhs`
    pub fn bit_xor(&self, rhs: &Self) -> Self {
        bitwise(self, rhs, |a, b| a ^ b)
    }
}
