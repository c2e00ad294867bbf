use magint::{Bigint, DIGIT_BITS};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod identities;
mod reference;

/// Checks for equality and that invariants are being kept
#[track_caller]
pub fn eq(lhs: &Bigint, rhs: &Bigint) {
    lhs.assert_invariants();
    rhs.assert_invariants();
    if lhs != rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Checks for nonequality and that invariants are being kept
#[track_caller]
pub fn ne(lhs: &Bigint, rhs: &Bigint) {
    lhs.assert_invariants();
    rhs.assert_invariants();
    if lhs == rhs {
        panic!("lhs and rhs are equal when they should not be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Generates a random value of at most about `max_len` digits, biased
/// towards patterns that stress carries, borrows, and estimates
pub fn fuzz_value(rng: &mut Xoshiro128StarStar, max_len: usize) -> Bigint {
    let len = (rng.next_u32() as usize) % (max_len + 1);
    let bits = len * DIGIT_BITS;
    let neg = (rng.next_u32() & 1) != 0;
    let x = match rng.next_u32() % 4 {
        0 => Bigint::rand_using(rng, len, false).unwrap(),
        // a run of ones
        1 if bits > 0 => {
            let r0 = (rng.next_u32() as usize) % bits;
            let r1 = (rng.next_u32() as usize) % bits;
            let ones = Bigint::one().shl(bits - r0).sub(&Bigint::one());
            ones.shl(r1 / 2)
        }
        2 => Bigint::from_u64(rng.next_u64() >> (rng.next_u32() % 64)),
        // sparse bits
        _ => {
            let mut x = Bigint::zero();
            if bits > 0 {
                for _ in 0..3 {
                    let r = (rng.next_u32() as usize) % bits;
                    x = x.bit_or(&Bigint::one().shl(r));
                }
            }
            x
        }
    };
    if neg {
        x.negate()
    } else {
        x
    }
}

pub use identities::identities;
pub use reference::{reference, reference_doubles};
