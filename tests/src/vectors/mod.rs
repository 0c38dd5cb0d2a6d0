//! Known-answer vectors (FIPS 180-4 sample messages, RFC 4231) stored as JSON

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use sha2mac_algorithms::{hash::sha2, hmac, BitBuffer};
use sha2mac_api::Variant;

/// Failures while loading or checking a vector file
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("computation failed: {0}")]
    Compute(#[from] sha2mac_algorithms::Error),

    #[error("tcId {test_id} ({variant}): expected {expected}, got {actual}")]
    Mismatch {
        test_id: u64,
        variant: Variant,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// A vector file: one algorithm, many cases
#[derive(Debug, Deserialize)]
pub struct VectorFile<T> {
    pub algorithm: String,
    pub tests: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashVector {
    pub tc_id: u64,
    pub variant: Variant,
    #[serde(default)]
    pub description: Option<String>,
    pub msg: String,
    pub md: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HmacVector {
    pub tc_id: u64,
    pub variant: Variant,
    #[serde(default)]
    pub description: Option<String>,
    pub key: String,
    pub msg: String,
    pub mac: String,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

fn load<T: for<'de> Deserialize<'de>>(name: &str) -> Result<VectorFile<T>> {
    let path = vectors_dir().join(name);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io { path, source })?;
    Ok(serde_json::from_str(&text)?)
}

pub fn load_hash_vectors() -> Result<VectorFile<HashVector>> {
    load("sha2.json")
}

pub fn load_hmac_vectors() -> Result<VectorFile<HmacVector>> {
    load("hmac.json")
}

fn check(test_id: u64, variant: Variant, expected: &str, actual: String) -> Result<()> {
    if expected.eq_ignore_ascii_case(&actual) {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            test_id,
            variant,
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check every digest vector, returning how many passed
pub fn run_hash_vectors() -> Result<usize> {
    let file = load_hash_vectors()?;
    for tc in &file.tests {
        let msg = BitBuffer::from_bytes(&hex::decode(&tc.msg)?);
        let digest = sha2::digest(&msg, tc.variant)?;
        check(tc.tc_id, tc.variant, &tc.md, digest.to_hex(false))?;
    }
    Ok(file.tests.len())
}

/// Check every HMAC vector, returning how many passed
pub fn run_hmac_vectors() -> Result<usize> {
    let file = load_hmac_vectors()?;
    for tc in &file.tests {
        let key = BitBuffer::from_bytes(&hex::decode(&tc.key)?);
        let msg = BitBuffer::from_bytes(&hex::decode(&tc.msg)?);
        let tag = hmac(&key, &msg, tc.variant)?;
        check(tc.tc_id, tc.variant, &tc.mac, tag.to_hex(false))?;
    }
    Ok(file.tests.len())
}
