//! Textual input decoding

use alloc::string::ToString;
use alloc::vec::Vec;

use sha2mac_api::{Error, InputEncoding, Result};

/// Decode `text` according to `encoding`
///
/// `context` names what is being decoded (`"message"` or `"key"`) and is
/// carried by any error.
pub fn decode(text: &str, encoding: InputEncoding, context: &'static str) -> Result<Vec<u8>> {
    match encoding {
        InputEncoding::Ascii => Ok(decode_ascii(text)),
        InputEncoding::Hex => decode_hex(text, context),
    }
}

/// One byte per UTF-16 code unit: its low 8 bits
///
/// Characters outside the Basic Multilingual Plane are surrogate pairs and
/// contribute two bytes.
pub fn decode_ascii(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| (unit & 0xff) as u8).collect()
}

/// Decode hex text (either letter case) into bytes
pub fn decode_hex(text: &str, context: &'static str) -> Result<Vec<u8>> {
    let length = text.chars().count();
    if length % 2 != 0 {
        return Err(Error::OddLengthHex { context, length });
    }

    let invalid = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit());
    if let Some((index, character)) = invalid {
        return Err(Error::InvalidHexDigit {
            context,
            character,
            index,
        });
    }

    hex::decode(text).map_err(|e| Error::InvalidParameter {
        context,
        message: e.to_string(),
    })
}
