//! Error handling for the digest and MAC primitives

use alloc::borrow::Cow;
use core::fmt;

use sha2mac_api::Error as ApiError;

/// The error type for digest and MAC primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error (words or bytes)
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Bit length exceeding the storage that backs it
    BitLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Largest bit length the storage can hold
        max: u64,
        /// Requested bit length
        actual: u64,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for digest and MAC primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::BitLength {
                context,
                max,
                actual,
            } => {
                write!(
                    f,
                    "Invalid bit length for {}: at most {} bits available, got {}",
                    context, max, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Primitive errors surface through the public taxonomy
impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::BitLength {
                context,
                max,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected: usize::try_from(max).unwrap_or(usize::MAX),
                actual: usize::try_from(actual).unwrap_or(usize::MAX),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
