use alloc::{string::String, vec::Vec};
use core::{fmt::Write, str::FromStr};

use magint_internals::{
    decimal_chars_upper_bound, digits_upper_bound, hex_string_capacity, BigintError, Chunk,
    CHUNK_BITS, DECIMAL_CHUNK_BASE, DECIMAL_CHUNK_DIGITS, HEX_CHARS_PER_DIGIT,
};

use crate::{
    logic::{div::short_divide_assign, mul::short_mul_add_assign},
    Bigint, DigitBuf,
};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Counts the leading `-` characters. Every minus toggles the sign, so the
/// result is negative if there are an odd number of them.
fn strip_minus(s: &str) -> (bool, usize) {
    let n = s.bytes().take_while(|c| *c == b'-').count();
    ((n % 2) == 1, n)
}

fn invalid_char(s: &str, pos: usize) -> BigintError {
    // `pos` is always on a char boundary because everything before it is ASCII
    let ch = s[pos..].chars().next().unwrap_or('\0');
    BigintError::InvalidChar { pos, ch }
}

/// Parses the unsigned decimal magnitude in `s[start..]`
fn parse_decimal(s: &str, start: usize) -> Result<DigitBuf, BigintError> {
    let src = &s.as_bytes()[start..];
    if src.is_empty() {
        return Err(BigintError::Empty)
    }
    if let Some(i) = src.iter().position(|c| !c.is_ascii_digit()) {
        return Err(invalid_char(s, start + i))
    }
    let mut buf = DigitBuf::with_capacity(digits_upper_bound(src.len()));
    let mut fold = |group: &[u8]| {
        let mut x: Chunk = 0;
        for c in group {
            x = (x * 10) + ((*c - b'0') as Chunk);
        }
        short_mul_add_assign(&mut buf, DECIMAL_CHUNK_BASE, x);
    };
    // the first group takes the remainder so that every following group is
    // full
    let first = src.len() % DECIMAL_CHUNK_DIGITS;
    fold(&src[..first]);
    for group in src[first..].chunks(DECIMAL_CHUNK_DIGITS) {
        fold(group);
    }
    Ok(buf)
}

/// Parses the unsigned hexadecimal magnitude in `s[start..]`
fn parse_hex(s: &str, start: usize) -> Result<DigitBuf, BigintError> {
    let src = &s.as_bytes()[start..];
    if src.is_empty() {
        return Err(BigintError::Empty)
    }
    if let Some(i) = src.iter().position(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid_char(s, start + i))
    }
    let len = src.len().div_ceil(HEX_CHARS_PER_DIGIT);
    let mut buf = DigitBuf::allocate(len);
    let res = buf.as_mut_slice();
    // from the least significant end
    for (i, c) in src.iter().rev().enumerate() {
        let nibble = match *c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        };
        res[i / HEX_CHARS_PER_DIGIT] |= (nibble as Chunk) << (4 * (i % HEX_CHARS_PER_DIGIT));
    }
    Ok(buf)
}

fn finish_signed(mut buf: DigitBuf, neg: bool) -> Bigint {
    buf.set_neg(neg);
    buf.finish()
}

/// # Strings
///
/// Parsing accepts any number of leading `-` characters, each of which
/// toggles the sign (so `"--5"` is 5). There is no `+` sign and no whitespace
/// or separator handling.
impl Bigint {
    /// Parses an optionally negative decimal string, e.x. `"-1234"`
    ///
    /// # Errors
    ///
    /// Returns `Empty` if there are no decimal characters, or `InvalidChar`
    /// for the first character that is not an ASCII decimal digit
    pub fn from_decimal_str(s: &str) -> Result<Self, BigintError> {
        let (neg, start) = strip_minus(s);
        Ok(finish_signed(parse_decimal(s, start)?, neg))
    }

    /// Parses an optionally negative hexadecimal string without a prefix,
    /// e.x. `"-fF0"`. Both cases of `a-f` are accepted.
    ///
    /// # Errors
    ///
    /// Returns `Empty` if there are no hexadecimal characters, or
    /// `InvalidChar` for the first character that is not a hexadecimal digit
    pub fn from_hex_str(s: &str) -> Result<Self, BigintError> {
        let (neg, start) = strip_minus(s);
        Ok(finish_signed(parse_hex(s, start)?, neg))
    }

    /// Writes the magnitude in unprefixed lowercase hexadecimal, which is "0"
    /// for zero
    pub(crate) fn write_magnitude_hex(&self, s: &mut String) {
        let Some(msd) = self.digits.last() else {
            s.push('0');
            return
        };
        let leading = (CHUNK_BITS - (msd.leading_zeros() as usize)).div_ceil(4);
        let mut push_nibbles = |d: Chunk, n: usize| {
            for k in (0..n).rev() {
                let nibble = ((d >> (4 * k)) & 0xf) as usize;
                s.push(char::from(HEX_CHARS[nibble]));
            }
        };
        push_nibbles(*msd, leading);
        for d in self.digits[..(self.len() - 1)].iter().rev() {
            push_nibbles(*d, HEX_CHARS_PER_DIGIT);
        }
    }

    /// Formats `self` as `0x` prefixed lowercase hexadecimal, with a leading
    /// `-` if negative. Zero is "0x0".
    ///
    /// ```
    /// use magint_core::prelude::*;
    ///
    /// let x = Bigint::from_u64(u64::MAX).add(&Bigint::from_i64(6));
    /// assert_eq!(x.to_hex_string(), "0x10000000000000005");
    /// assert_eq!(x.negate().to_hex_string(), "-0x10000000000000005");
    /// assert_eq!(Bigint::zero().to_hex_string(), "0x0");
    /// ```
    pub fn to_hex_string(&self) -> String {
        let capacity = hex_string_capacity(
            self.len(),
            self.digits.last().copied().unwrap_or(0),
            self.neg,
        );
        let mut s = String::with_capacity(capacity);
        if self.neg {
            s.push('-');
        }
        s.push_str("0x");
        self.write_magnitude_hex(&mut s);
        debug_assert_eq!(s.len(), capacity);
        s
    }

    /// Formats `self` as decimal, with a leading `-` if negative
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return String::from("0")
        }
        // peel off groups of decimal digits from the least significant end
        let mut mag: Vec<Chunk> = self.digits.to_vec();
        let mut groups: Vec<Chunk> = Vec::new();
        while !mag.is_empty() {
            groups.push(short_divide_assign(&mut mag, DECIMAL_CHUNK_BASE));
            while let Some(0) = mag.last() {
                mag.pop();
            }
        }
        let mut s = String::with_capacity(
            decimal_chars_upper_bound(self.bit_len()) + (self.neg as usize),
        );
        if self.neg {
            s.push('-');
        }
        let mut groups = groups.iter().rev();
        if let Some(first) = groups.next() {
            // writing to a `String` cannot fail
            let _ = write!(s, "{first}");
        }
        for group in groups {
            let _ = write!(s, "{group:0width$}", width = DECIMAL_CHUNK_DIGITS);
        }
        s
    }
}

impl FromStr for Bigint {
    type Err = BigintError;

    /// Parses an optionally negative decimal string, or a hexadecimal string
    /// if the part after the minus signs starts with `0x` or `0X`
    ///
    /// ```
    /// use magint_core::prelude::*;
    ///
    /// let x: Bigint = "123456789012345678901234567890".parse().unwrap();
    /// let y: Bigint = "0x18ee90ff6c373e0ee4e3f0ad2".parse().unwrap();
    /// assert_eq!(x, y);
    /// assert_eq!("-0XfF".parse::<Bigint>(), Ok(Bigint::from_i64(-255)));
    /// assert_eq!("--5".parse::<Bigint>(), Ok(Bigint::from_i64(5)));
    /// assert_eq!(
    ///     "12a4".parse::<Bigint>(),
    ///     Err(BigintError::InvalidChar { pos: 2, ch: 'a' })
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, BigintError> {
        let (neg, start) = strip_minus(s);
        let rest = &s.as_bytes()[start..];
        let buf = if rest.starts_with(b"0x") || rest.starts_with(b"0X") {
            parse_hex(s, start + 2)?
        } else {
            parse_decimal(s, start)?
        };
        Ok(finish_signed(buf, neg))
    }
}
