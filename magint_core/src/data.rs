mod bigint;
mod digit_buf;
#[cfg(feature = "serde_support")]
mod serde;

pub use bigint::Bigint;
pub use digit_buf::DigitBuf;
