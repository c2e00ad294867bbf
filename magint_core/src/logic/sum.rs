use core::cmp::Ordering;

use magint_internals::{widen_add, widen_sub, Chunk, DIGIT_MAX};

use crate::{logic::cmp::unsigned_cmp_digits, Bigint, DigitBuf};

/// Adds two magnitudes into a new buffer with room for the final carry
pub(crate) fn add_digits(lhs: &[Chunk], rhs: &[Chunk]) -> DigitBuf {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut buf = DigitBuf::allocate(long.len() + 1);
    let res = buf.as_mut_slice();
    let mut carry = 0;
    for i in 0..short.len() {
        (res[i], carry) = widen_add(long[i], short[i], carry);
    }
    for i in short.len()..long.len() {
        (res[i], carry) = widen_add(long[i], 0, carry);
    }
    res[long.len()] = carry;
    buf
}

/// Subtracts `rhs` from `lhs`, `lhs` must be at least `rhs`
pub(crate) fn sub_digits(lhs: &[Chunk], rhs: &[Chunk]) -> DigitBuf {
    debug_assert!(unsigned_cmp_digits(lhs, rhs) != Ordering::Less);
    let mut buf = DigitBuf::allocate(lhs.len());
    let res = buf.as_mut_slice();
    let mut borrow = 0;
    for i in 0..rhs.len() {
        (res[i], borrow) = widen_sub(lhs[i], rhs[i], borrow);
    }
    for i in rhs.len()..lhs.len() {
        (res[i], borrow) = widen_sub(lhs[i], 0, borrow);
    }
    debug_assert_eq!(borrow, 0);
    buf
}

/// Adds `rhs` to the low digits of `lhs` in place, `rhs` must not be longer
/// than `lhs`. Returns the carry out of the most significant digit.
pub(crate) fn add_assign_digits(lhs: &mut [Chunk], rhs: &[Chunk]) -> Chunk {
    debug_assert!(rhs.len() <= lhs.len());
    let mut carry = 0;
    for i in 0..rhs.len() {
        (lhs[i], carry) = widen_add(lhs[i], rhs[i], carry);
    }
    for i in rhs.len()..lhs.len() {
        if carry == 0 {
            break
        }
        (lhs[i], carry) = widen_add(lhs[i], 0, carry);
    }
    carry
}

/// Subtracts `rhs` from the low digits of `lhs` in place, `rhs` must not be
/// longer than `lhs`. Returns the borrow out of the most significant digit,
/// in which case `lhs` has wrapped around.
pub(crate) fn sub_assign_digits(lhs: &mut [Chunk], rhs: &[Chunk]) -> Chunk {
    debug_assert!(rhs.len() <= lhs.len());
    let mut borrow = 0;
    for i in 0..rhs.len() {
        (lhs[i], borrow) = widen_sub(lhs[i], rhs[i], borrow);
    }
    for i in rhs.len()..lhs.len() {
        if borrow == 0 {
            break
        }
        (lhs[i], borrow) = widen_sub(lhs[i], 0, borrow);
    }
    borrow
}

/// Increments a magnitude in place and returns the carry out
pub(crate) fn inc_digits(x: &mut [Chunk]) -> bool {
    for d in x.iter_mut() {
        if *d == DIGIT_MAX {
            *d = 0;
        } else {
            *d += 1;
            return false
        }
    }
    true
}

/// # Addition and subtraction
impl Bigint {
    /// Returns `|self| + |rhs|`
    pub fn unsigned_add(&self, rhs: &Self) -> Self {
        add_digits(&self.digits, &rhs.digits).finish()
    }

    /// Returns `|self| - |rhs|`, or `None` if `|self| < |rhs|`
    pub fn unsigned_sub(&self, rhs: &Self) -> Option<Self> {
        if self.unsigned_compare(rhs) == Ordering::Less {
            return None
        }
        Some(sub_digits(&self.digits, &rhs.digits).finish())
    }

    /// Adds `self` to `rhs` with its sign flipped if `negate_rhs`. Same signs
    /// add magnitudes, differing signs subtract the smaller magnitude from the
    /// larger and take the sign of the larger.
    pub fn add_sub(&self, rhs: &Self, negate_rhs: bool) -> Self {
        let rhs_neg = rhs.neg != negate_rhs;
        if self.neg == rhs_neg {
            let mut buf = add_digits(&self.digits, &rhs.digits);
            buf.set_neg(self.neg);
            return buf.finish()
        }
        match self.unsigned_compare(rhs) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                let mut buf = sub_digits(&self.digits, &rhs.digits);
                buf.set_neg(self.neg);
                buf.finish()
            }
            Ordering::Less => {
                let mut buf = sub_digits(&rhs.digits, &self.digits);
                buf.set_neg(rhs_neg);
                buf.finish()
            }
        }
    }

    /// Returns `self + rhs`
    pub fn add(&self, rhs: &Self) -> Self {
        self.add_sub(rhs, false)
    }

    /// Returns `self - rhs`
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add_sub(rhs, true)
    }
}
