//! Error type definitions for digest and MAC operations

use alloc::string::String;
use core::fmt;

/// Context label for errors raised while decoding the message
pub const MESSAGE_CONTEXT: &str = "message";

/// Context label for errors raised while decoding an HMAC key
pub const KEY_CONTEXT: &str = "key";

/// Primary error type for sha2mac operations
///
/// Every failure is reported as one of these variants; a digest is never
/// returned in place of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex text with an odd number of digits.
    ///
    /// With `context == "key"` this is the invalid key encoding case.
    OddLengthHex {
        /// What was being decoded (`"message"` or `"key"`)
        context: &'static str,
        /// Number of hex digits supplied
        length: usize,
    },

    /// Hex text containing a character outside `[0-9a-fA-F]`
    InvalidHexDigit {
        /// What was being decoded (`"message"` or `"key"`)
        context: &'static str,
        /// The offending character
        character: char,
        /// Character index of the offending character
        index: usize,
    },

    /// Input encoding name that is neither ASCII nor HEX
    UnknownEncoding {
        /// The name that was requested
        name: String,
    },

    /// Hash variant other than SHA-224 or SHA-256
    UnsupportedVariant {
        /// The name that was requested
        name: String,
    },

    /// Output format other than hex or base64
    UnsupportedFormat {
        /// The name that was requested
        name: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Name of the parameter
        context: &'static str,
        /// Why it was rejected
        message: String,
    },
}

/// Result type for sha2mac operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::UnsupportedVariant`]
    pub fn unsupported_variant(name: impl Into<String>) -> Self {
        Self::UnsupportedVariant { name: name.into() }
    }

    /// Shorthand for an [`Error::UnsupportedFormat`]
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Shorthand for an [`Error::UnknownEncoding`]
    pub fn unknown_encoding(name: impl Into<String>) -> Self {
        Self::UnknownEncoding { name: name.into() }
    }

    /// True for malformed input text (message or key)
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(
            self,
            Self::OddLengthHex { .. } | Self::InvalidHexDigit { .. }
        )
    }

    /// True when the error was raised while decoding an HMAC key
    pub fn is_key_encoding(&self) -> bool {
        match self {
            Self::OddLengthHex { context, .. } | Self::InvalidHexDigit { context, .. } => {
                *context == KEY_CONTEXT
            }
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLengthHex { context, length } => write!(
                f,
                "invalid {} encoding: hex text must contain whole bytes, got {} digits",
                context, length
            ),
            Self::InvalidHexDigit {
                context,
                character,
                index,
            } => write!(
                f,
                "invalid {} encoding: {:?} at index {} is not a hex digit",
                context, character, index
            ),
            Self::UnknownEncoding { name } => write!(f, "unknown input encoding '{}'", name),
            Self::UnsupportedVariant { name } => write!(f, "unsupported hash variant '{}'", name),
            Self::UnsupportedFormat { name } => write!(f, "unsupported output format '{}'", name),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
