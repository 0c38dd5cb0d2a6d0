//! Constants for HMAC (FIPS 198-1)

/// Inner pad byte
pub const HMAC_IPAD_BYTE: u8 = 0x36;

/// Outer pad byte
pub const HMAC_OPAD_BYTE: u8 = 0x5c;

/// Inner pad byte repeated across a 32-bit word
pub const HMAC_IPAD_WORD: u32 = u32::from_be_bytes([HMAC_IPAD_BYTE; 4]);

/// Outer pad byte repeated across a 32-bit word
pub const HMAC_OPAD_WORD: u32 = u32::from_be_bytes([HMAC_OPAD_BYTE; 4]);

/// Normalized HMAC key size in 32-bit words (one SHA-256 block)
pub const HMAC_KEY_WORDS: usize = 16;

/// Normalized HMAC key size in bits
pub const HMAC_KEY_BITS: u64 = 512;
