//! Known-answer tests driven by the JSON vector files

use sha2mac_api::Variant;
use sha2mac_tests::vectors::{load_hash_vectors, load_hmac_vectors};
use sha2mac_tests::{run_hash_vectors, run_hmac_vectors};

#[test]
fn hash_vectors_pass() {
    let passed = run_hash_vectors().unwrap();
    assert_eq!(passed, 10);
}

#[test]
fn hmac_vectors_pass() {
    let passed = run_hmac_vectors().unwrap();
    assert_eq!(passed, 12);
}

#[test]
fn vector_files_cover_both_variants() {
    let hashes = load_hash_vectors().unwrap();
    assert_eq!(hashes.algorithm, "SHA2");
    for variant in Variant::ALL {
        assert!(hashes.tests.iter().any(|tc| tc.variant == variant));
    }

    let macs = load_hmac_vectors().unwrap();
    assert_eq!(macs.algorithm, "HMAC-SHA2");
    for variant in Variant::ALL {
        assert!(macs.tests.iter().any(|tc| tc.variant == variant));
    }
}

#[test]
fn digest_lengths_match_variant() {
    for tc in load_hash_vectors().unwrap().tests {
        assert_eq!(tc.md.len(), tc.variant.output_size() * 2, "tcId {}", tc.tc_id);
    }
}
