//! Names for the hash variants, output formats and input encodings
//!
//! Each enum parses from the textual names callers use (`"SHA-256"`, `"B64"`,
//! `"HEX"`, ...) and reports an unrecognized name as a typed error.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use sha2mac_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA224_OUTPUT_WORDS, SHA256_OUTPUT_SIZE, SHA256_OUTPUT_WORDS,
};

/// A member of the SHA-256 family
///
/// SHA-224 and SHA-256 share the compression function; they differ only in
/// the initial hash value and in SHA-224 dropping the last state word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// SHA-224 (seven output words)
    #[cfg_attr(feature = "serde", serde(rename = "SHA-224"))]
    Sha224,
    /// SHA-256 (eight output words)
    #[cfg_attr(feature = "serde", serde(rename = "SHA-256"))]
    Sha256,
}

impl Variant {
    /// Every supported variant
    pub const ALL: [Variant; 2] = [Variant::Sha224, Variant::Sha256];

    /// Canonical name, e.g. `"SHA-256"`
    pub fn name(self) -> &'static str {
        match self {
            Variant::Sha224 => "SHA-224",
            Variant::Sha256 => "SHA-256",
        }
    }

    /// Number of 32-bit words in the digest
    pub fn output_words(self) -> usize {
        match self {
            Variant::Sha224 => SHA224_OUTPUT_WORDS,
            Variant::Sha256 => SHA256_OUTPUT_WORDS,
        }
    }

    /// Digest size in bytes
    pub fn output_size(self) -> usize {
        match self {
            Variant::Sha224 => SHA224_OUTPUT_SIZE,
            Variant::Sha256 => SHA256_OUTPUT_SIZE,
        }
    }

    /// Digest size in bits (224 or 256)
    pub fn bit_size(self) -> u64 {
        self.output_size() as u64 * 8
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SHA-224" => Ok(Variant::Sha224),
            "SHA-256" => Ok(Variant::Sha256),
            _ => Err(Error::unsupported_variant(s)),
        }
    }
}

/// Display encoding of a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputFormat {
    /// Two hex digits per byte
    #[cfg_attr(feature = "serde", serde(rename = "HEX"))]
    Hex,
    /// Standard base64 alphabet
    #[cfg_attr(feature = "serde", serde(rename = "B64"))]
    Base64,
}

impl OutputFormat {
    /// Canonical name, `"HEX"` or `"B64"`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Hex => "HEX",
            OutputFormat::Base64 => "B64",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HEX" => Ok(OutputFormat::Hex),
            "B64" => Ok(OutputFormat::Base64),
            _ => Err(Error::unsupported_format(s)),
        }
    }
}

/// Encoding of textual message or key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputEncoding {
    /// One byte per UTF-16 code unit (its low 8 bits)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ASCII"))]
    Ascii,
    /// Two hex digits per byte
    #[cfg_attr(feature = "serde", serde(rename = "HEX"))]
    Hex,
}

impl InputEncoding {
    /// Canonical name, `"ASCII"` or `"HEX"`
    pub fn name(self) -> &'static str {
        match self {
            InputEncoding::Ascii => "ASCII",
            InputEncoding::Hex => "HEX",
        }
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ASCII" => Ok(InputEncoding::Ascii),
            "HEX" => Ok(InputEncoding::Hex),
            _ => Err(Error::unknown_encoding(s)),
        }
    }
}

/// Output encoding options, fixed per session
///
/// The default is lowercase hex and unpadded base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodingConfig {
    /// Emit `A-F` instead of `a-f`
    pub hex_uppercase: bool,
    /// Character appended where standard base64 would emit `=`
    pub base64_pad: Option<char>,
}

impl EncodingConfig {
    /// Lowercase hex, standard `=` base64 padding
    pub fn padded() -> Self {
        Self {
            hex_uppercase: false,
            base64_pad: Some('='),
        }
    }

    /// Set the hex letter case
    pub fn with_hex_uppercase(mut self, uppercase: bool) -> Self {
        self.hex_uppercase = uppercase;
        self
    }

    /// Set (or clear) the base64 pad character
    pub fn with_base64_pad(mut self, pad: Option<char>) -> Self {
        self.base64_pad = pad;
        self
    }
}
