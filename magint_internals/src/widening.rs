use crate::{Chunk, DoubleChunk, CHUNK_BITS, DIGIT_BITS, DIGIT_MAX};

/// Digit addition with carry. Returns the sum digit and the carry out, which
/// is either 0 or 1. `x` and `y` must be at most `DIGIT_MAX` and `carry` at
/// most 1.
#[inline]
pub const fn widen_add(x: Chunk, y: Chunk, carry: Chunk) -> (Chunk, Chunk) {
    // cannot overflow because of the headroom above `DIGIT_BITS`
    let sum = x + y + carry;
    (sum & DIGIT_MAX, sum >> DIGIT_BITS)
}

/// Digit subtraction with borrow. Returns the difference digit and the borrow
/// out, which is either 0 or 1. `x` and `y` must be at most `DIGIT_MAX` and
/// `borrow` at most 1.
#[inline]
pub const fn widen_sub(x: Chunk, y: Chunk, borrow: Chunk) -> (Chunk, Chunk) {
    // a negative difference wraps around into the top bit of the chunk
    let diff = x.wrapping_sub(y).wrapping_sub(borrow);
    (diff & DIGIT_MAX, diff >> (CHUNK_BITS - 1))
}

/// Computes `x * y + z` and returns the low digit and the high digit of the
/// result. The high digit is always at most `DIGIT_MAX` when all inputs are.
#[inline]
pub const fn widen_mul_add(x: Chunk, y: Chunk, z: Chunk) -> (Chunk, Chunk) {
    let tmp = (x as DoubleChunk) * (y as DoubleChunk) + (z as DoubleChunk);
    ((tmp as Chunk) & DIGIT_MAX, (tmp >> DIGIT_BITS) as Chunk)
}
