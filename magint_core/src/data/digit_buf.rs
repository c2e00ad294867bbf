use alloc::vec::Vec;
use core::ops::Deref;

use magint_internals::{Chunk, DIGIT_MAX};

use crate::Bigint;

/// A mutable, not yet published `Bigint`. Operations allocate one of these
/// with enough digits for the worst case, write the digits, and then
/// `finish` it, which clamps away non-significant zero digits and makes a
/// zero result non-negative.
///
/// ```
/// use magint_core::prelude::*;
///
/// let mut buf = DigitBuf::allocate(4);
/// buf.set(1, 7).unwrap();
/// buf.set_neg(true);
/// let x = buf.finish();
/// assert_eq!(x.len(), 2);
/// assert!(x.is_negative());
///
/// // an all zero buffer becomes a non-negative zero
/// let mut buf = DigitBuf::allocate(3);
/// buf.set_neg(true);
/// assert_eq!(buf.finish(), Bigint::zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuf {
    neg: bool,
    digits: Vec<Chunk>,
}

impl DigitBuf {
    /// Allocates `len` zeroed digits with a non-negative sign
    pub fn allocate(len: usize) -> Self {
        let mut digits = Vec::with_capacity(len);
        digits.resize(len, 0);
        Self { neg: false, digits }
    }

    /// An empty buffer that can grow to `capacity` digits without
    /// reallocating
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            neg: false,
            digits: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_vec(neg: bool, digits: Vec<Chunk>) -> Self {
        Self { neg, digits }
    }

    pub(crate) fn from_slice(neg: bool, digits: &[Chunk]) -> Self {
        Self {
            neg,
            digits: digits.to_vec(),
        }
    }

    /// Sets digit `i` to `digit`. Returns `None` if `i` is out of bounds or if
    /// `digit` has bits set above `DIGIT_BITS`.
    #[must_use]
    pub fn set(&mut self, i: usize, digit: Chunk) -> Option<()> {
        if digit > DIGIT_MAX {
            return None
        }
        *self.digits.get_mut(i)? = digit;
        Some(())
    }

    #[inline]
    pub fn set_neg(&mut self, neg: bool) {
        self.neg = neg;
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Chunk] {
        &mut self.digits
    }

    #[inline]
    pub(crate) fn push(&mut self, digit: Chunk) {
        debug_assert!(digit <= DIGIT_MAX);
        self.digits.push(digit);
    }

    /// Returns if there are no non-significant zero digits
    pub fn is_clamped(&self) -> bool {
        self.digits.last().map_or(true, |msd| *msd != 0)
    }

    /// Removes non-significant zero digits. Clamping is idempotent.
    pub fn clamp(&mut self) {
        while let Some(0) = self.digits.last() {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.neg = false;
        }
    }

    /// Clamps and publishes the value
    pub fn finish(mut self) -> Bigint {
        self.clamp();
        debug_assert!(self.digits.iter().all(|d| *d <= DIGIT_MAX));
        Bigint {
            neg: self.neg,
            digits: self.digits.into_boxed_slice(),
        }
    }
}

impl Deref for DigitBuf {
    type Target = [Chunk];

    #[inline]
    fn deref(&self) -> &[Chunk] {
        &self.digits
    }
}
