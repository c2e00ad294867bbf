use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Neg, Not, Rem, Shl, Shr, Sub,
    SubAssign,
};

use crate::Bigint;

// the binary operators are implemented for every combination of owned and
// borrowed operands in terms of the borrowing inherent functions
macro_rules! binary_op {
    ($($Trait:ident $fn:ident $f:expr);*;) => {
        $(
            impl<'a, 'b> $Trait<&'b Bigint> for &'a Bigint {
                type Output = Bigint;

                fn $fn(self, rhs: &'b Bigint) -> Bigint {
                    $f(self, rhs)
                }
            }

            impl<'b> $Trait<&'b Bigint> for Bigint {
                type Output = Bigint;

                fn $fn(self, rhs: &'b Bigint) -> Bigint {
                    $f(&self, rhs)
                }
            }

            impl<'a> $Trait<Bigint> for &'a Bigint {
                type Output = Bigint;

                fn $fn(self, rhs: Bigint) -> Bigint {
                    $f(self, &rhs)
                }
            }

            impl $Trait<Bigint> for Bigint {
                type Output = Bigint;

                fn $fn(self, rhs: Bigint) -> Bigint {
                    $f(&self, &rhs)
                }
            }
        )*
    };
}

binary_op!(
    Add add Bigint::add;
    Sub sub Bigint::sub;
    Mul mul |x: &Bigint, y: &Bigint| x.mul(y).unwrap();
    Div div |x: &Bigint, y: &Bigint| x.divide(y).unwrap();
    Rem rem |x: &Bigint, y: &Bigint| x.remainder(y).unwrap();
    BitAnd bitand Bigint::bit_and;
    BitOr bitor Bigint::bit_or;
    BitXor bitxor Bigint::bit_xor;
);

impl<'a> AddAssign<&'a Bigint> for Bigint {
    fn add_assign(&mut self, rhs: &'a Bigint) {
        *self = Bigint::add(self, rhs);
    }
}

impl<'a> SubAssign<&'a Bigint> for Bigint {
    fn sub_assign(&mut self, rhs: &'a Bigint) {
        *self = Bigint::sub(self, rhs);
    }
}

impl<'a> MulAssign<&'a Bigint> for Bigint {
    fn mul_assign(&mut self, rhs: &'a Bigint) {
        *self = Bigint::mul(self, rhs).unwrap();
    }
}

impl Neg for &Bigint {
    type Output = Bigint;

    fn neg(self) -> Bigint {
        self.negate()
    }
}

impl Neg for Bigint {
    type Output = Bigint;

    fn neg(self) -> Bigint {
        let neg = !self.neg;
        self.with_sign(neg)
    }
}

impl Not for &Bigint {
    type Output = Bigint;

    fn not(self) -> Bigint {
        self.bit_not()
    }
}

impl Not for Bigint {
    type Output = Bigint;

    fn not(self) -> Bigint {
        self.bit_not()
    }
}

impl Shl<usize> for &Bigint {
    type Output = Bigint;

    fn shl(self, s: usize) -> Bigint {
        Bigint::shl(self, s)
    }
}

impl Shl<usize> for Bigint {
    type Output = Bigint;

    fn shl(self, s: usize) -> Bigint {
        Bigint::shl(&self, s)
    }
}

impl Shr<usize> for &Bigint {
    type Output = Bigint;

    fn shr(self, s: usize) -> Bigint {
        Bigint::shr(self, s)
    }
}

impl Shr<usize> for Bigint {
    type Output = Bigint;

    fn shr(self, s: usize) -> Bigint {
        Bigint::shr(&self, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators() {
        let a = Bigint::from_i64(-100);
        let b = Bigint::from_i64(7);
        assert_eq!(&a + &b, Bigint::from_i64(-93));
        assert_eq!(a.clone() - &b, Bigint::from_i64(-107));
        assert_eq!(&a * b.clone(), Bigint::from_i64(-700));
        assert_eq!(a.clone() / b.clone(), Bigint::from_i64(-14));
        assert_eq!(&a % &b, Bigint::from_i64(-2));
        assert_eq!(&a & &b, Bigint::from_i64(-100 & 7));
        assert_eq!(&a | &b, Bigint::from_i64(-100 | 7));
        assert_eq!(&a ^ &b, Bigint::from_i64(-100 ^ 7));
        assert_eq!(-&a, Bigint::from_i64(100));
        assert_eq!(-Bigint::zero(), Bigint::zero());
        assert_eq!(!&b, Bigint::from_i64(-8));
        assert_eq!(&b << 3, Bigint::from_i64(56));
        assert_eq!(a.clone() >> 3, Bigint::from_i64(-13));
        let mut c = a.clone();
        c += &b;
        c -= &a;
        c *= &b;
        assert_eq!(c, Bigint::from_i64(49));
    }

    #[test]
    #[should_panic]
    fn division_by_zero_panics() {
        let _ = Bigint::one() / Bigint::zero();
    }
}
