use thiserror::Error;

/// An error from a `Bigint` construction or operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[non_exhaustive]
pub enum BigintError {
    /// A division, modulo, or remainder was attempted with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// The input string has no magnitude characters, e.x. `""`, `"-"`, or
    /// `"0x"`
    #[error("empty integer string")]
    Empty,
    /// The input string has a character that is not a digit of the radix
    /// being parsed. `pos` is the byte position in the whole input string.
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidChar { pos: usize, ch: char },
    /// Both operands of a multiplication are longer than the Comba column
    /// accumulator can handle without overflowing
    #[error("multiplication of {len} digit operands exceeds the supported {max} digits")]
    UnsupportedMagnitude { len: usize, max: usize },
    /// A NaN or infinite double cannot be converted into an integer
    #[error("cannot convert a special double into an integer")]
    SpecialDouble,
    /// The value does not fit in the target machine type
    #[error("value does not fit in the target type")]
    Overflow,
}
