//! End-to-end tests through the string-level session API

use sha2mac_api::{EncodingConfig, Error, InputEncoding, OutputFormat, Variant};
use sha2mac_session::{BitBuffer, DigestSession};

#[test]
fn string_surface_matches_fips_examples() {
    let session = DigestSession::new("abc", InputEncoding::Ascii).unwrap();
    assert_eq!(
        session.digest_by_name("SHA-256", "HEX").unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        session.digest_by_name("SHA-224", "HEX").unwrap(),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
}

#[test]
fn base64_output_padding() {
    // 28-byte SHA-224 digest leaves two pad positions
    let session = DigestSession::from_bytes(b"abc");
    let bare = session
        .digest_encoded(Variant::Sha224, OutputFormat::Base64)
        .unwrap();
    assert_eq!(bare.len(), 38);
    assert!(!bare.ends_with('='));

    let padded = DigestSession::from_bytes(b"abc")
        .with_config(EncodingConfig::default().with_base64_pad(Some('=')));
    let out = padded
        .digest_encoded(Variant::Sha224, OutputFormat::Base64)
        .unwrap();
    assert_eq!(out, format!("{}==", bare));

    let custom = DigestSession::from_bytes(b"abc")
        .with_config(EncodingConfig::default().with_base64_pad(Some('.')));
    assert!(custom
        .digest_encoded(Variant::Sha224, OutputFormat::Base64)
        .unwrap()
        .ends_with('.'));
}

#[test]
fn errors_are_values_not_strings() {
    let session = DigestSession::from_bytes(b"abc");

    let err = session.digest_by_name("SHA-384", "HEX").unwrap_err();
    assert_eq!(err, Error::unsupported_variant("SHA-384"));
    assert_eq!(err.to_string(), "unsupported hash variant 'SHA-384'");

    let err = session.digest_by_name("SHA-256", "BIN").unwrap_err();
    assert_eq!(err, Error::unsupported_format("BIN"));

    let err = DigestSession::new("abc", InputEncoding::Hex).unwrap_err();
    assert!(err.is_invalid_encoding());
    assert!(!err.is_key_encoding());
}

#[test]
fn hmac_with_long_hex_key() {
    let session = DigestSession::new("Test Using Larger Than Block-Size Key - Hash Key First", InputEncoding::Ascii).unwrap();
    let tag = session
        .hmac_encoded(&"aa".repeat(131), InputEncoding::Hex, Variant::Sha256, OutputFormat::Hex)
        .unwrap();
    assert_eq!(
        tag,
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn key_normalization_600_bits() {
    let key_bytes = [0x42u8; 75];
    let key = BitBuffer::from_bytes(&key_bytes);
    let session = DigestSession::from_bytes(b"payload");

    let hashed = DigestSession::from_bytes(&key_bytes)
        .digest(Variant::Sha256)
        .unwrap()
        .to_bit_buffer();

    assert_eq!(
        session.hmac(&key, Variant::Sha256).unwrap(),
        session.hmac(&hashed, Variant::Sha256).unwrap()
    );
}

#[test]
fn unaligned_session_input() {
    let full = BitBuffer::from_bytes(b"abc");
    let trimmed = BitBuffer::from_words(full.words(), 23).unwrap();
    let session = DigestSession::from_bit_buffer(trimmed);
    assert_eq!(session.message().bit_len(), 23);
    assert_ne!(
        session.digest(Variant::Sha256).unwrap(),
        DigestSession::from_bytes(b"abc").digest(Variant::Sha256).unwrap()
    );
}
