//! This crate contains common developer utilities for crates within the
//! `magint` system: the digit configuration selected by the `*_digits`
//! features, the constants derived from it, widening digit arithmetic,
//! capacity formulas, and the shared error type. Most users should never have
//! to interact with this directly, everything needed is reexported by
//! `magint_core` and `magint`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod bounds;
mod error;
mod widening;

pub use bounds::{decimal_chars_upper_bound, digits_upper_bound, hex_string_capacity};
pub use error::BigintError;
pub use widening::{widen_add, widen_mul_add, widen_sub};

#[cfg(any(
    all(feature = "u16_digits", feature = "u32_digits"),
    all(feature = "u16_digits", feature = "u64_digits"),
    all(feature = "u32_digits", feature = "u64_digits"),
))]
compile_error!(
    "Attempted to activate multiple `*_digits` features at the same time. This is likely because \
     `--all-features` was used, which does not work for `magint`."
);

/// The physical storage type of one digit. Only the low `DIGIT_BITS` bits of a
/// stored digit are ever set, the headroom above them is where carries and
/// borrows appear during arithmetic.
#[cfg(feature = "u16_digits")]
pub type Chunk = u16;
#[cfg(not(any(feature = "u16_digits", feature = "u64_digits")))]
pub type Chunk = u32;
#[cfg(feature = "u64_digits")]
pub type Chunk = u64;

/// Accumulator type with at least twice the bits of a digit, used for column
/// sums in multiplication and two-digit quotient estimates in division
#[cfg(feature = "u16_digits")]
pub type DoubleChunk = u32;
#[cfg(not(any(feature = "u16_digits", feature = "u64_digits")))]
pub type DoubleChunk = u64;
#[cfg(feature = "u64_digits")]
pub type DoubleChunk = u128;

/// Number of significant bits in a digit
#[cfg(feature = "u16_digits")]
pub const DIGIT_BITS: usize = 12;
#[cfg(not(any(feature = "u16_digits", feature = "u64_digits")))]
pub const DIGIT_BITS: usize = 28;
#[cfg(feature = "u64_digits")]
pub const DIGIT_BITS: usize = 56;

/// Bitwidth of a `Chunk`
pub const CHUNK_BITS: usize = Chunk::BITS as usize;

/// Maximum value of a digit, also used as the digit mask
pub const DIGIT_MAX: Chunk = ((1 as Chunk) << DIGIT_BITS) - 1;

/// Number of hexadecimal characters that one digit is formatted into
pub const HEX_CHARS_PER_DIGIT: usize = DIGIT_BITS / 4;

const fn decimal_chunk() -> (usize, Chunk) {
    let mut digits = 0;
    let mut base: DoubleChunk = 1;
    while base * 10 <= (DIGIT_MAX as DoubleChunk) {
        base *= 10;
        digits += 1;
    }
    (digits, base as Chunk)
}

/// The number of decimal characters folded into the accumulator at a time
/// when parsing and peeled off at a time when formatting. This is the largest
/// `g` such that `10^g < 2^DIGIT_BITS`.
pub const DECIMAL_CHUNK_DIGITS: usize = decimal_chunk().0;

/// `10^DECIMAL_CHUNK_DIGITS`
pub const DECIMAL_CHUNK_BASE: Chunk = decimal_chunk().1;

/// The largest length of the shorter operand for which Comba multiplication
/// cannot overflow a `DoubleChunk` column accumulator. A column sums at most
/// this many products of `DIGIT_MAX * DIGIT_MAX` on top of the carry from the
/// previous column, which is at most `DoubleChunk::MAX >> DIGIT_BITS`.
pub const MAX_COMBA_DIGITS: usize = ((DoubleChunk::MAX - (DoubleChunk::MAX >> DIGIT_BITS))
    / ((DIGIT_MAX as DoubleChunk) * (DIGIT_MAX as DoubleChunk)))
    as usize;

/// The minimum value of the host's small integer type
pub const SMALL_INT_MIN: i64 = -(1 << 62);

/// The maximum value of the host's small integer type
pub const SMALL_INT_MAX: i64 = (1 << 62) - 1;

const _: () = assert!(DIGIT_BITS % 4 == 0);
const _: () = assert!(DIGIT_BITS < CHUNK_BITS);
const _: () = assert!(2 * DIGIT_BITS <= DoubleChunk::BITS as usize);
const _: () = assert!(MAX_COMBA_DIGITS > 0);
