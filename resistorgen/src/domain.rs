//! Supported value range and the errors raised outside of it.

use thiserror::Error;

/// Smallest value the series produces (1 Ω).
pub const MIN_VALUE: f64 = 1.0;

/// Terminal value of the series (10 MΩ).
pub const MAX_VALUE: f64 = 10_000_000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Value must be a finite positive number, got {0}")]
    NotPositive(f64),
    #[error("Value {value} is outside the supported range {min}..={max}")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },
    #[error("Value {value} needs multiplier exponent {exponent}, only -2..=9 can be encoded")]
    ExponentOutOfRange { value: f64, exponent: i32 },
    #[error("Value {value} does not reduce to three significant digits (got {digits})")]
    NotThreeDigits { value: f64, digits: f64 },
}

/// Reject non-finite and non-positive values.
pub(crate) fn check_positive(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NotPositive(value))
    }
}

/// Reject values outside [`MIN_VALUE`]..=[`MAX_VALUE`].
pub(crate) fn check_range(value: f64) -> Result<f64, DomainError> {
    let value = check_positive(value)?;
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::ValueOutOfRange {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        })
    }
}
