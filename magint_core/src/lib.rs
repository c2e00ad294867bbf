//! This crate contains the core `Bigint` storage type and all of its
//! arithmetic. `Bigint` is a sign-magnitude arbitrary precision integer whose
//! magnitude is stored as little-endian digits of `DIGIT_BITS` significant
//! bits each. Values are immutable, every operation produces a new canonical
//! (clamped) value. `DigitBuf` is the mutable builder that operations use
//! before publishing a value.
//!
//! Most users should use the `magint` crate which reexports everything here.
//!
//! Fallible operations return `Option` or `Result<_, BigintError>`, the
//! `core::ops` trait implementations panic on those errors instead.

#![no_std]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::manual_range_contains)]

extern crate alloc;

pub(crate) mod data;
mod logic;

pub use data::{Bigint, DigitBuf};
pub use logic::{unsigned_cmp_nonclamped, DoubleParts};
#[doc(hidden)]
pub use magint_internals;
pub use magint_internals::{
    decimal_chars_upper_bound, hex_string_capacity, BigintError, Chunk, DoubleChunk,
    DECIMAL_CHUNK_BASE, DECIMAL_CHUNK_DIGITS, DIGIT_BITS, DIGIT_MAX, HEX_CHARS_PER_DIGIT,
    MAX_COMBA_DIGITS, SMALL_INT_MAX, SMALL_INT_MIN,
};

/// Reexports the commonly used items
pub mod prelude {
    pub use crate::{Bigint, BigintError, DigitBuf, DoubleParts};
}
