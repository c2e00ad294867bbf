use core::cmp::Ordering;

use magint_internals::Chunk;

use crate::Bigint;

/// Compares digit slices of equal length from the most significant end
fn cmp_equal_len(lhs: &[Chunk], rhs: &[Chunk]) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len());
    for i in (0..lhs.len()).rev() {
        match lhs[i].cmp(&rhs[i]) {
            Ordering::Equal => (),
            o => return o,
        }
    }
    Ordering::Equal
}

/// Compares two clamped magnitudes
pub(crate) fn unsigned_cmp_digits(lhs: &[Chunk], rhs: &[Chunk]) -> Ordering {
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => cmp_equal_len(lhs, rhs),
        o => o,
    }
}

/// Compares two little-endian magnitudes that may have non-significant zero
/// digits at their most significant ends. This is used for intermediate
/// values inside of division.
pub fn unsigned_cmp_nonclamped(lhs: &[Chunk], rhs: &[Chunk]) -> Ordering {
    let mut lhs_len = lhs.len();
    let mut rhs_len = rhs.len();
    while lhs_len > rhs_len {
        if lhs[lhs_len - 1] != 0 {
            return Ordering::Greater
        }
        lhs_len -= 1;
    }
    while rhs_len > lhs_len {
        if rhs[rhs_len - 1] != 0 {
            return Ordering::Less
        }
        rhs_len -= 1;
    }
    cmp_equal_len(&lhs[..lhs_len], &rhs[..rhs_len])
}

/// # Comparison
impl Bigint {
    /// Compares the magnitudes of `self` and `rhs`
    pub fn unsigned_compare(&self, rhs: &Self) -> Ordering {
        unsigned_cmp_digits(&self.digits, &rhs.digits)
    }

    /// Compares the signed values of `self` and `rhs`
    pub fn compare(&self, rhs: &Self) -> Ordering {
        match (self.neg, rhs.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.unsigned_compare(rhs),
            (true, true) => rhs.unsigned_compare(self),
        }
    }
}

impl PartialOrd for Bigint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bigint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
