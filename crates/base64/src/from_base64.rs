//! Standard base64 decoding function.

use crate::constants::LOOKUP;
use crate::Base64Error;

const PADDING_CHAR: u8 = b'=';

/// Full-string grammar for padded standard base64: zero or more quartets of
/// alphabet characters, optionally ending in an `XX==` or `XXX=` quartet.
fn base64_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
            .unwrap()
    })
}

/// Decodes a standard base64 string to bytes.
///
/// The whole input is validated before any output is allocated: the length
/// must be a multiple of 4 and the string must match the padded base64
/// grammar, with `=` permitted only as the last one or two characters.
///
/// # Arguments
///
/// * `encoded` - The base64-encoded input string.
///
/// # Returns
///
/// The decoded bytes, or an error if the input is not valid base64.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64;
///
/// let decoded = from_base64("aGVsbG8=").unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let length = encoded.len();
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    if !base64_regex().is_match(encoded) {
        return Err(Base64Error::InvalidBase64String);
    }
    if length == 0 {
        return Ok(Vec::new());
    }

    let bytes = encoded.as_bytes();
    let mut buffer_length = (length >> 2) * 3;
    if bytes[length - 1] == PADDING_CHAR {
        buffer_length -= 1;
        if bytes[length - 2] == PADDING_CHAR {
            buffer_length -= 1;
        }
    }

    let mut buf = vec![0u8; buffer_length];
    let mut i = 0;
    let mut p = 0;
    while i < length {
        let sextet0 = LOOKUP[bytes[i] as usize] as u8;
        let sextet1 = LOOKUP[bytes[i + 1] as usize] as u8;

        buf[p] = (sextet0 << 2) | (sextet1 >> 4);
        // The last quartet holds 1 or 2 fewer output bytes when padded;
        // padding positions are never looked up.
        if p + 1 < buffer_length {
            let sextet2 = LOOKUP[bytes[i + 2] as usize] as u8;
            buf[p + 1] = ((sextet1 & 0b1111) << 4) | (sextet2 >> 2);
            if p + 2 < buffer_length {
                let sextet3 = LOOKUP[bytes[i + 3] as usize] as u8;
                buf[p + 2] = ((sextet2 & 0b11) << 6) | sextet3;
            }
        }
        p += 3;
        i += 4;
    }

    Ok(buf)
}
