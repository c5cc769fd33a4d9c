//! Base64 encoding and decoding.
//!
//! Implements the RFC 4648 standard base64 codec: the `A`-`Z`, `a`-`z`,
//! `0`-`9`, `+`, `/` alphabet with `=` padding. Encoding accepts arbitrary
//! bytes and never fails; decoding validates the whole input up front and
//! never produces a partial buffer.
//!
//! # Example
//!
//! ```
//! use base64_codec::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod from_base64;
mod from_base64_bin;
mod to_base64;
mod to_base64_bin;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use from_base64_bin::from_base64_bin;
pub use to_base64::to_base64;
pub use to_base64_bin::to_base64_bin;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input does not match the padded base64 grammar.
    #[error("INVALID_BASE64_STRING")]
    InvalidBase64String,
    /// The base64 string length must be a multiple of 4.
    #[error("Base64 string length must be a multiple of 4")]
    InvalidLength,
    /// The requested region lies outside the source buffer.
    #[error("region out of bounds of the source buffer")]
    OutOfBounds,
}
