use magint::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

#[test]
fn rand() {
    let mut rng0 = Xoshiro128StarStar::seed_from_u64(0);
    let mut rng1 = Xoshiro128StarStar::seed_from_u64(0);
    let mut full_len = false;
    for len in 0..64 {
        let x = Bigint::rand_using(&mut rng0, len, (len % 2) == 1).unwrap();
        let y = Bigint::rand_using(&mut rng1, len, (len % 2) == 1).unwrap();
        // deterministic for a given seed
        assert_eq!(x, y);
        x.assert_invariants();
        assert!(x.len() <= len);
        full_len |= (len > 0) && (x.len() == len);
        if len == 0 {
            assert!(x.is_zero());
        } else {
            assert_eq!(x.is_negative(), (len % 2) == 1);
        }
    }
    assert!(full_len);
    // different seeds diverge
    let mut rng2 = Xoshiro128StarStar::seed_from_u64(1);
    assert_ne!(
        Bigint::rand_using(&mut rng0, 8, false).unwrap(),
        Bigint::rand_using(&mut rng2, 8, false).unwrap()
    );
}
