use crate::{Chunk, CHUNK_BITS, DIGIT_BITS, HEX_CHARS_PER_DIGIT};

/// `ceil(log_2(10))` as a u3p13 fixed point number
const LB_10_U3P13: u64 = 27214;

/// `ceil(log_10(2))` as a u0p16 fixed point number
const LOG10_2_U0P16: u64 = 19729;

/// Returns the exact number of bytes that hex formatting produces for a value
/// with `len` digits, most significant digit `msd`, and sign `neg`. This
/// includes the `0x` prefix, and the "0x0" special case when `len == 0`.
pub const fn hex_string_capacity(len: usize, msd: Chunk, neg: bool) -> usize {
    if len == 0 {
        return 3
    }
    let msd_bits = CHUNK_BITS - (msd.leading_zeros() as usize);
    let leading = (msd_bits + 3) / 4;
    (neg as usize) + 2 + leading + (len - 1) * HEX_CHARS_PER_DIGIT
}

/// Returns an upper bound on the number of decimal characters (not counting a
/// sign) needed to format a magnitude with `significant_bits` bits
pub const fn decimal_chars_upper_bound(significant_bits: usize) -> usize {
    (((significant_bits as u128) * (LOG10_2_U0P16 as u128)) >> 16) as usize + 1
}

/// Returns an upper bound on the number of digits needed to hold the value of
/// a string of `decimal_chars` decimal characters
pub const fn digits_upper_bound(decimal_chars: usize) -> usize {
    let bits = (((decimal_chars as u128) * (LB_10_U3P13 as u128)) >> 13) as usize + 1;
    (bits / DIGIT_BITS) + 1
}
