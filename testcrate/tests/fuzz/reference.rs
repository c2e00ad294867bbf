//! Differential checks against native `i128` arithmetic, which has the same
//! truncating division and two's complement bitwise semantics

use magint::{Bigint, SMALL_INT_MAX, SMALL_INT_MIN};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

#[track_caller]
fn check(x: &Bigint, expected: i128) {
    x.assert_invariants();
    assert_eq!(x.to_decimal_string(), expected.to_string());
    let hex = if expected < 0 {
        format!("-{:#x}", expected.unsigned_abs())
    } else {
        format!("{expected:#x}")
    };
    assert_eq!(x.to_hex_string(), hex);
}

fn fuzz_i64(rng: &mut Xoshiro128StarStar) -> i64 {
    match rng.next_u32() % 16 {
        0 => i64::MIN,
        1 => i64::MAX,
        2 => 0,
        3 => -1,
        4 => SMALL_INT_MIN,
        5 => SMALL_INT_MAX,
        _ => (rng.next_u64() as i64) >> (rng.next_u32() % 64),
    }
}

pub fn reference(iters: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x = fuzz_i64(&mut rng);
        let y = fuzz_i64(&mut rng);
        let a = Bigint::from_i64(x);
        let b = Bigint::from_i64(y);
        assert_eq!(a.to_i64(), Some(x));
        assert_eq!(a.to_u64(), u64::try_from(x).ok());
        assert_eq!(
            a.to_small_int(),
            Some(x).filter(|x| (SMALL_INT_MIN..=SMALL_INT_MAX).contains(x))
        );
        assert_eq!(a.compare(&b), x.cmp(&y));
        assert_eq!(a.unsigned_compare(&b), x.unsigned_abs().cmp(&y.unsigned_abs()));
        assert_eq!(a.to_f64(), Some(x as f64));
        assert_eq!(x.to_string().parse::<Bigint>(), Ok(a.clone()));

        let (x, y) = (x as i128, y as i128);
        check(&a.add(&b), x + y);
        check(&a.sub(&b), x - y);
        check(&a.mul(&b).unwrap(), x * y);
        if y != 0 {
            check(&a.divide(&b).unwrap(), x / y);
            check(&a.remainder(&b).unwrap(), x % y);
            check(&a.modulo(&b).unwrap(), x % y);
        }
        check(&a.bit_and(&b), x & y);
        check(&a.bit_or(&b), x | y);
        check(&a.bit_xor(&b), x ^ y);
        check(&a.bit_not(), !x);
        check(&a.negate(), -x);
        check(&a.abs(), x.abs());
        let s = (rng.next_u32() % 64) as usize;
        check(&a.shl(s), x << s);
        let s = (rng.next_u32() % 128) as usize;
        check(&a.shr(s), x >> s);
        let product = a.mul(&b).unwrap();
        assert_eq!(product.fits_in_i64(), i64::try_from(x * y).is_ok());
        assert_eq!(product.fits_in_u64(), u64::try_from(x * y).is_ok());
        assert_eq!(product.to_f64(), Some((x * y) as f64));
    }
}

pub fn reference_doubles(iters: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let d = f64::from_bits(rng.next_u64());
        if !d.is_finite() {
            assert!(Bigint::from_f64(d).is_err());
            continue
        }
        if d.abs() >= 2f64.powi(126) {
            let x = Bigint::from_f64(d).unwrap();
            assert_eq!(x.to_f64(), Some(d));
            continue
        }
        check(&Bigint::from_f64(d).unwrap(), d as i128);
    }
}
