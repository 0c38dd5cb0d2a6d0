//! Property-based tests across the codec, padding and session layers

use proptest::prelude::*;
use sha2mac_algorithms::hash::sha2::{pad, padded_bit_len};
use sha2mac_algorithms::{hmac, BitBuffer};
use sha2mac_api::{InputEncoding, Variant};
use sha2mac_session::DigestSession;
use sha2mac_utils::{decode_hex, encode_hex};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Sha224), Just(Variant::Sha256)]
}

/// Arbitrary bit sequence, not necessarily byte aligned
fn bit_buffer() -> impl Strategy<Value = BitBuffer> {
    (prop::collection::vec(any::<u32>(), 0..40), 0u64..32).prop_map(|(words, trim)| {
        let bit_len = (words.len() as u64 * 32).saturating_sub(trim);
        BitBuffer::from_words(&words, bit_len).unwrap()
    })
}

proptest! {
    #[test]
    fn padded_length_is_minimal(bit_len in 0u64..1_000_000) {
        let padded = padded_bit_len(bit_len);
        prop_assert_eq!(padded % 512, 0);
        prop_assert!(padded >= bit_len + 65);
        prop_assert!(padded - 512 < bit_len + 65);
    }

    #[test]
    fn pad_matches_padded_length(message in bit_buffer()) {
        let padded = pad(&message);
        prop_assert_eq!(padded.bit_len(), padded_bit_len(message.bit_len()));
    }

    #[test]
    fn hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..128), upper in any::<bool>()) {
        let text = encode_hex(&bytes, upper);
        let decoded = decode_hex(&text, "message").unwrap();
        prop_assert_eq!(&decoded, &bytes);
        prop_assert_eq!(encode_hex(&decoded, upper), text);
    }

    #[test]
    fn digest_is_memoized_and_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..200), v in variant()) {
        let session = DigestSession::from_bytes(&bytes);
        let first = session.digest(v).unwrap();
        prop_assert!(session.is_cached(v));
        let second = session.digest(v).unwrap();
        prop_assert_eq!(&first, &second);

        let fresh = DigestSession::from_bytes(&bytes).digest(v).unwrap();
        prop_assert_eq!(first.len(), v.output_words());
        prop_assert_eq!(first, fresh);
    }

    #[test]
    fn ascii_and_hex_inputs_agree(text in "[ -~]{0,64}") {
        let hex_text = hex::encode(text.as_bytes());
        let a = DigestSession::new(&text, InputEncoding::Ascii).unwrap();
        let b = DigestSession::new(&hex_text, InputEncoding::Hex).unwrap();
        prop_assert_eq!(a.digest(Variant::Sha256).unwrap(), b.digest(Variant::Sha256).unwrap());
    }

    #[test]
    fn long_keys_are_hashed(key in prop::collection::vec(any::<u8>(), 65..200), v in variant()) {
        let message = BitBuffer::from_bytes(b"message");
        let long_key = BitBuffer::from_bytes(&key);
        let short_key = sha2mac_algorithms::hash::sha2::digest(&long_key, v).unwrap().to_bit_buffer();
        prop_assert_eq!(hmac(&long_key, &message, v).unwrap(), hmac(&short_key, &message, v).unwrap());
    }

    #[test]
    fn verify_accepts_own_tag(key in prop::collection::vec(any::<u8>(), 0..100), msg in prop::collection::vec(any::<u8>(), 0..100)) {
        let session = DigestSession::from_bytes(&msg);
        let key = BitBuffer::from_bytes(&key);
        let tag = session.hmac(&key, Variant::Sha256).unwrap().to_bytes();
        prop_assert!(session.verify_hmac(&key, Variant::Sha256, &tag).unwrap());
    }
}
