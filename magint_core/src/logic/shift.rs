use magint_internals::{Chunk, DIGIT_BITS, DIGIT_MAX};

use crate::{logic::sum::inc_digits, Bigint, DigitBuf};

/// Returns if any of the bits of `x` below bit position `s` are set
pub(crate) fn any_bits_below(x: &[Chunk], s: usize) -> bool {
    let digit_shift = s / DIGIT_BITS;
    let bit_shift = s % DIGIT_BITS;
    if digit_shift >= x.len() {
        return x.iter().any(|d| *d != 0)
    }
    if x[..digit_shift].iter().any(|d| *d != 0) {
        return true
    }
    (bit_shift != 0) && ((x[digit_shift] & ((1 << bit_shift) - 1)) != 0)
}

/// Shifts a magnitude left by `s` bits into a new buffer
pub(crate) fn shl_digits(x: &[Chunk], s: usize) -> DigitBuf {
    let digit_shift = s / DIGIT_BITS;
    let bit_shift = s % DIGIT_BITS;
    if bit_shift == 0 {
        let mut buf = DigitBuf::allocate(x.len() + digit_shift);
        buf.as_mut_slice()[digit_shift..].copy_from_slice(x);
        return buf
    }
    let mut buf = DigitBuf::allocate(x.len() + digit_shift + 1);
    let res = buf.as_mut_slice();
    let mut carry = 0;
    for i in 0..x.len() {
        let d = x[i];
        res[i + digit_shift] = ((d << bit_shift) & DIGIT_MAX) | carry;
        carry = d >> (DIGIT_BITS - bit_shift);
    }
    res[x.len() + digit_shift] = carry;
    buf
}

/// Shifts a magnitude right by `s` bits into a new buffer, truncating
pub(crate) fn shr_digits(x: &[Chunk], s: usize) -> DigitBuf {
    let digit_shift = s / DIGIT_BITS;
    let bit_shift = s % DIGIT_BITS;
    if digit_shift >= x.len() {
        return DigitBuf::allocate(0)
    }
    let len = x.len() - digit_shift;
    let mut buf = DigitBuf::allocate(len);
    let res = buf.as_mut_slice();
    if bit_shift == 0 {
        res.copy_from_slice(&x[digit_shift..]);
        return buf
    }
    let mut carry = 0;
    for i in (0..len).rev() {
        let d = x[i + digit_shift];
        res[i] = (d >> bit_shift) | carry;
        carry = (d << (DIGIT_BITS - bit_shift)) & DIGIT_MAX;
    }
    buf
}

/// # Shifts
impl Bigint {
    /// Returns `self * 2^s`
    pub fn shl(&self, s: usize) -> Self {
        if self.is_zero() || s == 0 {
            return self.clone()
        }
        let mut buf = shl_digits(&self.digits, s);
        buf.set_neg(self.neg);
        buf.finish()
    }

    /// Returns `floor(self / 2^s)`. This is an arithmetic shift right, so
    /// negative values round toward negative infinity like they would in
    /// two's complement, e.x. `-1 >> s` is always `-1`.
    pub fn shr(&self, s: usize) -> Self {
        if self.is_zero() || s == 0 {
            return self.clone()
        }
        if (s / DIGIT_BITS) >= self.len() {
            return if self.neg {
                Self::minus_one()
            } else {
                Self::zero()
            }
        }
        let mut buf = shr_digits(&self.digits, s);
        if self.neg {
            if any_bits_below(&self.digits, s) {
                // -(|x| >> s) - 1
                if inc_digits(buf.as_mut_slice()) {
                    buf.push(1);
                }
            }
            buf.set_neg(true);
        }
        buf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts() {
        let x = Bigint::from_i64(-5);
        assert_eq!(x.shr(1), Bigint::from_i64(-3));
        assert_eq!(x.shr(2), Bigint::from_i64(-2));
        assert_eq!(x.shr(3), Bigint::from_i64(-1));
        assert_eq!(x.shr(1000), Bigint::minus_one());
        assert_eq!(x.abs().shr(1000), Bigint::zero());
        assert_eq!(Bigint::from_i64(-4).shr(2), Bigint::minus_one());
        assert_eq!(x.shl(DIGIT_BITS + 1).shr(DIGIT_BITS + 1), x);
        assert_eq!(x.shl(0), x);
        assert_eq!(Bigint::zero().shl(100), Bigint::zero());

        let one = Bigint::one();
        for s in 0..(3 * DIGIT_BITS) {
            let p = one.shl(s);
            p.assert_invariants();
            assert_eq!(p.bit_len(), s + 1);
            assert_eq!(p.shr(s), one);
            assert_eq!(p.negate().shr(s), Bigint::minus_one());
            assert!(!any_bits_below(p.digits(), s));
            assert!(any_bits_below(p.digits(), s + 1));
        }
    }

    #[test]
    fn negative_rounding_carries() {
        // -(b^2 - 1) >> 1 rounds to -(b^2 / 2)
        let x = Bigint::from_digits(true, &[DIGIT_MAX, DIGIT_MAX]).unwrap();
        let expected = Bigint::one().shl(2 * DIGIT_BITS - 1).negate();
        assert_eq!(x.shr(1), expected);
        // the rounding increment overflows every digit of the truncated value
        let x = Bigint::from_digits(true, &[1, DIGIT_MAX]).unwrap();
        assert_eq!(x.shr(DIGIT_BITS), Bigint::one().shl(DIGIT_BITS).negate());
    }
}
