//! Arbitrary precision integers in sign-magnitude representation.
//!
//! This crate compiles all the interfaces of `magint_core`. The value type is
//! `Bigint`, see its documentation for the representation invariants.
//!
//! ```
//! use magint::prelude::*;
//!
//! let a: Bigint = "98765432109876543210".parse().unwrap();
//! let b: Bigint = "12345678901234567890".parse().unwrap();
//! assert_eq!(
//!     (&a * &b).to_string(),
//!     "1219326311370217952237463801111263526900"
//! );
//! assert_eq!(a.divide(&Bigint::zero()), Err(BigintError::DivisionByZero));
//! ```
//!
//! # Features
//!
//! - `u16_digits`, `u32_digits`, `u64_digits`: select the digit storage type,
//!   the default is the same as `u32_digits`. Only zero or one of these should
//!   be active.
//! - `serde_support`: `serde` impls for `Bigint`
//! - `rand_support`: `Bigint::rand_using`
//! - `zeroize_support`: `zeroize::Zeroize` for `Bigint`

#![no_std]

pub use magint_core::*;

pub mod prelude {
    pub use magint_core::prelude::*;
}
