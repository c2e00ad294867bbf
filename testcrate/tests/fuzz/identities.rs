use std::cmp::Ordering;

use magint::{
    decimal_chars_upper_bound, hex_string_capacity, unsigned_cmp_nonclamped, Bigint, BigintError,
    Chunk, DIGIT_BITS, DIGIT_MAX, SMALL_INT_MAX, SMALL_INT_MIN,
};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_value, ne};

/// Floored division by `2^s` computed through truncated division
fn floor_div_pow2(x: &Bigint, s: usize) -> Bigint {
    let (quo, rem) = x.divide_remainder(&Bigint::one().shl(s)).unwrap();
    if rem.is_negative() {
        quo.sub(&Bigint::one())
    } else {
        quo
    }
}

fn identities_inner(a: &Bigint, b: &Bigint, digit: u64, s: usize) {
    let zero = Bigint::zero();
    let one = Bigint::one();

    // string round trips
    eq(&a.to_hex_string().parse().unwrap(), a);
    eq(&a.to_decimal_string().parse().unwrap(), a);
    eq(&Bigint::from_decimal_str(&a.to_string()).unwrap(), a);
    let hex = a.to_hex_string();
    let unprefixed = hex.replacen("0x", "", 1);
    eq(&Bigint::from_hex_str(&unprefixed).unwrap(), a);
    eq(&Bigint::from_hex_str(&unprefixed.to_uppercase()).unwrap(), a);
    assert_eq!(
        hex.len(),
        hex_string_capacity(
            a.len(),
            a.digits().last().copied().unwrap_or(0),
            a.is_negative()
        )
    );
    assert!(
        a.to_decimal_string().len()
            <= decimal_chars_upper_bound(a.bit_len())
                + (a.is_negative() as usize)
    );
    eq(&Bigint::from_digits(a.is_negative(), a.digits()).unwrap(), a);

    // comparison
    assert_eq!(a.compare(b), b.compare(a).reverse());
    assert_eq!(a.compare(b), a.cmp(b));
    assert_eq!(a.compare(b), a.sub(b).compare(&zero));
    assert_eq!(a.unsigned_compare(b), a.abs().compare(&b.abs()));
    assert_eq!(
        a.unsigned_compare(b),
        unsigned_cmp_nonclamped(a.digits(), b.digits())
    );
    assert_eq!(a == b, a.compare(b) == Ordering::Equal);

    // additive
    eq(&a.add(&a.negate()), &zero);
    eq(&a.add(&zero), a);
    eq(&a.sub(&zero), a);
    eq(&a.add(b), &b.add(a));
    eq(&a.sub(b), &a.add(&b.negate()));
    eq(&a.sub(b), &b.sub(a).negate());
    eq(&a.add(b).sub(b), a);
    ne(&a.add(&one), a);
    eq(&a.unsigned_add(b), &a.abs().add(&b.abs()));
    match a.unsigned_compare(b) {
        Ordering::Less => assert!(a.unsigned_sub(b).is_none()),
        _ => eq(&a.unsigned_sub(b).unwrap(), &a.abs().sub(&b.abs())),
    }
    eq(&a.negate().negate(), a);
    eq(&a.abs(), &if a.is_negative() { a.negate() } else { a.clone() });

    // multiplicative
    let ab = a.mul(b).unwrap();
    eq(&ab, &b.mul(a).unwrap());
    eq(&a.mul(&b.add(&one)).unwrap(), &ab.add(a));
    eq(&a.mul(&zero).unwrap(), &zero);
    eq(&a.mul(&one).unwrap(), a);
    eq(&a.mul(&Bigint::minus_one()).unwrap(), &a.negate());
    assert_eq!(ab.is_negative(), !ab.is_zero() && (a.is_negative() != b.is_negative()));
    let digit = (digit as Chunk) & DIGIT_MAX;
    eq(
        &a.mul_digit(digit).unwrap(),
        &a.mul(&Bigint::from_u64(digit as u64)).unwrap(),
    );

    // division
    if b.is_zero() {
        assert_eq!(a.divide_remainder(b), Err(BigintError::DivisionByZero));
    } else {
        let (quo, rem) = a.divide_remainder(b).unwrap();
        eq(&quo.mul(b).unwrap().add(&rem), a);
        assert_eq!(rem.unsigned_compare(b), Ordering::Less);
        assert!(rem.is_zero() || (rem.is_negative() == a.is_negative()));
        assert!(quo.is_zero() || (quo.is_negative() == (a.is_negative() != b.is_negative())));
        eq(&a.divide(b).unwrap(), &quo);
        eq(&a.remainder(b).unwrap(), &rem);
        eq(&a.modulo(b).unwrap(), &rem);
        let (quo, rem) = ab.divide_remainder(b).unwrap();
        eq(&quo, a);
        eq(&rem, &zero);
    }

    // bitwise
    let not_a = a.bit_not();
    eq(&not_a, &a.negate().sub(&one));
    eq(&not_a.bit_not(), a);
    eq(&a.bit_and(b), &a.bit_not().bit_or(&b.bit_not()).bit_not());
    eq(&a.bit_or(b), &a.bit_not().bit_and(&b.bit_not()).bit_not());
    eq(&a.bit_xor(b), &a.bit_or(b).bit_and(&a.bit_and(b).bit_not()));
    eq(&a.bit_xor(a), &zero);
    eq(&a.bit_and(a), a);
    eq(&a.bit_or(a), a);
    eq(&a.bit_and(&Bigint::minus_one()), a);
    eq(&a.bit_or(&zero), a);
    eq(&a.bit_and(b).add(&a.bit_or(b)), &a.add(b));
    let and = a.bit_and(b);
    for i in 0..(a.len().max(b.len()) + 2) {
        assert_eq!(
            and.twos_complement_digit(i),
            a.twos_complement_digit(i) & b.twos_complement_digit(i)
        );
    }

    // shifts
    let pow = Bigint::one().shl(s);
    eq(&a.shl(s), &a.mul(&pow).unwrap());
    eq(&a.shl(s).shr(s), a);
    eq(&a.shr(s), &floor_div_pow2(a, s));
    if !a.is_negative() {
        eq(&a.shr(s), &a.divide(&pow).unwrap());
    }
    eq(&a.shl(s).shl(DIGIT_BITS), &a.shl(s + DIGIT_BITS));

    // machine integers
    if let Some(x) = a.to_i64() {
        eq(&Bigint::from_i64(x), a);
        assert!(a.fits_in_i64());
        assert_eq!(
            a.fits_in_small_int(),
            (SMALL_INT_MIN..=SMALL_INT_MAX).contains(&x)
        );
    } else {
        assert!(a.bit_len() >= 63);
    }
    if let Some(x) = a.to_u64() {
        eq(&Bigint::from_u64(x), a);
    } else {
        assert!(a.is_negative() || (a.bit_len() > 64));
    }

    // doubles are exact up to 53 bits
    if a.bit_len() <= 53 {
        let d = a.to_f64().unwrap();
        eq(&Bigint::from_f64(d).unwrap(), a);
    }
    if let Some(d) = a.to_f64() {
        // the rounding of an integer is an integer, so this is exact
        let back = Bigint::from_f64(d).unwrap();
        assert_eq!(back.to_f64(), Some(d));
        assert_eq!(back.is_negative(), a.is_negative());
    }
}

pub fn identities(iters: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let a = fuzz_value(&mut rng, max_len);
        let b = fuzz_value(&mut rng, max_len);
        let digit = rng.next_u64();
        let s = (rng.next_u32() as usize) % ((max_len + 2) * DIGIT_BITS);
        identities_inner(&a, &b, digit, s);
    }
}
