//! Digest display encodings

use alloc::string::String;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use sha2mac_api::{EncodingConfig, OutputFormat};

/// Encode `bytes` in `format` using the case and padding options of `config`
pub fn encode(bytes: &[u8], format: OutputFormat, config: &EncodingConfig) -> String {
    match format {
        OutputFormat::Hex => encode_hex(bytes, config.hex_uppercase),
        OutputFormat::Base64 => encode_base64(bytes, config.base64_pad),
    }
}

/// Two hex digits per byte, in the requested case
pub fn encode_hex(bytes: &[u8], uppercase: bool) -> String {
    if uppercase {
        hex::encode_upper(bytes)
    } else {
        hex::encode(bytes)
    }
}

/// Standard-alphabet base64
///
/// `pad` is appended once for every `=` standard base64 would emit; `None`
/// yields unpadded output.
pub fn encode_base64(bytes: &[u8], pad: Option<char>) -> String {
    let mut out = STANDARD_NO_PAD.encode(bytes);
    if let Some(pad) = pad {
        let missing = (3 - bytes.len() % 3) % 3;
        out.extend(core::iter::repeat(pad).take(missing));
    }
    out
}
