//! Tests for binary base64 decoding (from_base64_bin).

use base64_codec::{from_base64_bin, to_base64_bin, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut dest = vec![0u8; blob.len() * 4 + 4];
        let end = to_base64_bin(&blob, 0, blob.len(), &mut dest, 0);

        let decoded = from_base64_bin(&dest, 0, end).unwrap();
        assert_eq!(decoded, blob);
    }
}

#[test]
fn empty_region() {
    assert_eq!(from_base64_bin(b"", 0, 0).unwrap(), b"");
}

#[test]
fn with_offset() {
    let encoded = b"xxxxaGVsbG8="; // "xxxx" prefix, then "hello" encoded
    let decoded = from_base64_bin(encoded, 4, 8).unwrap();
    assert_eq!(decoded, b"hello");
}

#[test]
fn rejects_a_region_past_the_end() {
    assert_eq!(from_base64_bin(b"Zm9v", 0, 8), Err(Base64Error::OutOfBounds));
    assert_eq!(from_base64_bin(b"Zm9v", 5, 0), Err(Base64Error::OutOfBounds));
    assert_eq!(
        from_base64_bin(b"Zm9v", 4, usize::MAX),
        Err(Base64Error::OutOfBounds)
    );
}

#[test]
fn rejects_non_ascii_bytes() {
    assert_eq!(
        from_base64_bin(&[0xff, 0xfe, 0xfd, 0xfc], 0, 4),
        Err(Base64Error::InvalidBase64String)
    );
}

#[test]
fn rejects_a_truncated_region() {
    // Dropping the trailing '=' leaves a 7-byte region.
    assert_eq!(
        from_base64_bin(b"aGVsbG8=", 0, 7),
        Err(Base64Error::InvalidLength)
    );
}
