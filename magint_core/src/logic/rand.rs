use magint_internals::{Chunk, DIGIT_MAX};

use crate::{Bigint, DigitBuf};

/// `rand_support` functions
impl Bigint {
    // this is tested by `testcrate/tests/rand.rs`

    /// Creates a random `Bigint` of at most `len` digits using a
    /// `rand_core::RngCore` random number generator. Each digit is filled
    /// from eight bytes of `RngCore::try_fill_bytes` with the bits above
    /// `DIGIT_BITS` cleared, and the result is clamped, so it can have fewer
    /// than `len` digits. If `neg` is set and the result is nonzero, it is
    /// negative.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use magint_core::prelude::*;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = Bigint::rand_using(&mut rng, 4, true).unwrap();
    /// x.assert_invariants();
    /// assert!(x.len() <= 4);
    /// assert!(x.is_negative() || x.is_zero());
    /// ```
    pub fn rand_using<R>(rng: &mut R, len: usize, neg: bool) -> Result<Self, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut buf = DigitBuf::allocate(len);
        let mut bytes = [0u8; 8];
        for d in buf.as_mut_slice() {
            rng.try_fill_bytes(&mut bytes)?;
            *d = (u64::from_le_bytes(bytes) as Chunk) & DIGIT_MAX;
        }
        buf.set_neg(neg);
        Ok(buf.finish())
    }
}
