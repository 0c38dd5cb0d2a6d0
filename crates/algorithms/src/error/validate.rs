//! Validation utilities for digest and MAC primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of `unit`-sized pieces
///
/// On failure `expected` reports the next valid length.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual % unit != 0 {
        return Err(Error::Length {
            context,
            expected: (actual / unit + 1) * unit,
            actual,
        });
    }
    Ok(())
}

/// Validate that a bit length fits in the available storage
#[inline(always)]
pub fn bit_length(context: &'static str, actual: u64, max: u64) -> Result<()> {
    if actual > max {
        return Err(Error::BitLength {
            context,
            max,
            actual,
        });
    }
    Ok(())
}
