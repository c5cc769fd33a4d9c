//! Binary base64 decoding function.

use crate::from_base64;
use crate::Base64Error;

/// Decodes base64 bytes from a region of a source slice.
///
/// The region must hold ASCII text satisfying the same padded base64
/// grammar as [`from_base64`].
///
/// # Arguments
///
/// * `view` - The source byte slice containing base64-encoded data.
/// * `offset` - The starting offset in the source slice.
/// * `length` - The number of bytes to decode.
///
/// # Returns
///
/// The decoded bytes. Fails with [`Base64Error::OutOfBounds`] when the
/// region lies outside `view`, and with a format error when the region is
/// not valid base64.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64_bin;
///
/// let encoded = b"aGVsbG8=";
/// let decoded = from_base64_bin(encoded, 0, encoded.len()).unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn from_base64_bin(view: &[u8], offset: usize, length: usize) -> Result<Vec<u8>, Base64Error> {
    let region = offset
        .checked_add(length)
        .and_then(|end| view.get(offset..end))
        .ok_or(Base64Error::OutOfBounds)?;
    let encoded = std::str::from_utf8(region).map_err(|_| Base64Error::InvalidBase64String)?;
    from_base64(encoded)
}
