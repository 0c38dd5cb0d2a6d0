use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use sha2mac_algorithms::hash::sha2;
use sha2mac_algorithms::{BitBuffer, Digest, Hmac};
use sha2mac_api::{EncodingConfig, InputEncoding, OutputFormat, Variant};
use sha2mac_utils::{decode, encode};

use crate::error::{Result, SessionResultExt, KEY_CONTEXT, MESSAGE_CONTEXT};

/// One cached digest per variant
#[derive(Default)]
struct DigestCache {
    sha224: Option<Digest>,
    sha256: Option<Digest>,
}

impl DigestCache {
    fn slot(&mut self, variant: Variant) -> &mut Option<Digest> {
        match variant {
            Variant::Sha224 => &mut self.sha224,
            Variant::Sha256 => &mut self.sha256,
        }
    }
}

/// A message bound once, digested on demand
///
/// Digests are memoized per variant for the lifetime of the session. HMACs
/// depend on the key and are recomputed on every call.
pub struct DigestSession {
    message: BitBuffer,
    config: EncodingConfig,
    cache: Mutex<DigestCache>,
}

impl DigestSession {
    /// Decode `input` with `encoding` and bind it
    pub fn new(input: &str, encoding: InputEncoding) -> Result<Self> {
        let bytes = decode(input, encoding, MESSAGE_CONTEXT)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Bind raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bit_buffer(BitBuffer::from_bytes(bytes))
    }

    /// Bind an exact bit sequence
    pub fn from_bit_buffer(message: BitBuffer) -> Self {
        Self {
            message,
            config: EncodingConfig::default(),
            cache: Mutex::new(DigestCache::default()),
        }
    }

    /// Replace the output encoding options
    pub fn with_config(mut self, config: EncodingConfig) -> Self {
        self.config = config;
        self
    }

    /// The bound message
    pub fn message(&self) -> &BitBuffer {
        &self.message
    }

    /// The output encoding options
    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Whether the digest for `variant` has already been computed
    pub fn is_cached(&self, variant: Variant) -> bool {
        self.lock_cache().slot(variant).is_some()
    }

    /// Digest of the bound message, computed on first request
    pub fn digest(&self, variant: Variant) -> Result<Digest> {
        if let Some(cached) = self.lock_cache().slot(variant).as_ref() {
            return Ok(cached.clone());
        }

        let computed = sha2::digest(&self.message, variant).map_primitive_err()?;

        let mut cache = self.lock_cache();
        Ok(cache.slot(variant).get_or_insert(computed).clone())
    }

    /// Digest rendered in `format`
    pub fn digest_encoded(&self, variant: Variant, format: OutputFormat) -> Result<String> {
        let digest = self.digest(variant)?;
        Ok(encode(&digest.to_bytes(), format, &self.config))
    }

    /// Digest selected and rendered by name, e.g. `("SHA-256", "B64")`
    ///
    /// The format name is checked before the variant name.
    pub fn digest_by_name(&self, variant_name: &str, format_name: &str) -> Result<String> {
        let format: OutputFormat = format_name.parse()?;
        let variant: Variant = variant_name.parse()?;
        self.digest_encoded(variant, format)
    }

    /// HMAC of the bound message under `key`
    pub fn hmac(&self, key: &BitBuffer, variant: Variant) -> Result<Digest> {
        Hmac::new(key, variant)
            .and_then(|mac| mac.mac(&self.message))
            .map_primitive_err()
    }

    /// HMAC with a textual key
    ///
    /// Key decoding errors carry the `"key"` context.
    pub fn hmac_text(&self, key: &str, key_encoding: InputEncoding, variant: Variant) -> Result<Digest> {
        let key_bytes = decode(key, key_encoding, KEY_CONTEXT)?;
        self.hmac(&BitBuffer::from_bytes(&key_bytes), variant)
    }

    /// HMAC with a textual key, rendered in `format`
    pub fn hmac_encoded(
        &self,
        key: &str,
        key_encoding: InputEncoding,
        variant: Variant,
        format: OutputFormat,
    ) -> Result<String> {
        let tag = self.hmac_text(key, key_encoding, variant)?;
        Ok(encode(&tag.to_bytes(), format, &self.config))
    }

    /// HMAC selected and rendered by name
    ///
    /// Names are checked in order: output format, variant, key encoding.
    pub fn hmac_by_name(
        &self,
        key: &str,
        key_encoding_name: &str,
        variant_name: &str,
        format_name: &str,
    ) -> Result<String> {
        let format: OutputFormat = format_name.parse()?;
        let variant: Variant = variant_name.parse()?;
        let key_encoding: InputEncoding = key_encoding_name.parse()?;
        self.hmac_encoded(key, key_encoding, variant, format)
    }

    /// Constant-time check of `tag` against the HMAC of the bound message
    pub fn verify_hmac(&self, key: &BitBuffer, variant: Variant, tag: &[u8]) -> Result<bool> {
        Hmac::new(key, variant)
            .and_then(|mac| mac.verify(&self.message, tag))
            .map_primitive_err()
    }

    fn lock_cache(&self) -> MutexGuard<'_, DigestCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for DigestSession {
    fn clone(&self) -> Self {
        let cache = self.lock_cache();
        Self {
            message: self.message.clone(),
            config: self.config,
            cache: Mutex::new(DigestCache {
                sha224: cache.sha224.clone(),
                sha256: cache.sha256.clone(),
            }),
        }
    }
}

impl fmt::Debug for DigestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestSession")
            .field("message", &self.message)
            .field("config", &self.config)
            .field("sha224_cached", &self.is_cached(Variant::Sha224))
            .field("sha256_cached", &self.is_cached(Variant::Sha256))
            .finish()
    }
}
