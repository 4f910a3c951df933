//! Value to color-band encoding for 5-band (3 significant digit) resistors.

use crate::color::ColorBand;
use crate::domain::{check_range, DomainError};
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};

/// Lowest multiplier exponent with a color (silver, ×0.01).
pub const MIN_EXPONENT: i32 = -2;

/// Highest multiplier exponent with a color (white, ×10⁹).
pub const MAX_EXPONENT: i32 = 9;

/// Slack allowed when checking that the scaled value is a whole number.
const DIGIT_EPSILON: f64 = 1e-6;

/// Three digit bands followed by the multiplier band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSet {
    pub digits: [ColorBand; 3],
    pub multiplier: ColorBand,
}

impl BandSet {
    /// Bands in physical order: digit, digit, digit, multiplier.
    pub fn as_array(&self) -> [ColorBand; 4] {
        [self.digits[0], self.digits[1], self.digits[2], self.multiplier]
    }

    /// All five bands with the tolerance band last.
    pub fn with_tolerance(&self, tolerance: Tolerance) -> [ColorBand; 5] {
        [
            self.digits[0],
            self.digits[1],
            self.digits[2],
            self.multiplier,
            tolerance.color(),
        ]
    }
}

/// Encode `value` as three significant-digit bands and a multiplier band.
///
/// The multiplier exponent is chosen so that `value / 10^exp` has exactly
/// three integer digits. Values outside 1 Ω ..= 10 MΩ, values whose
/// exponent has no color, and values that do not reduce to three whole
/// digits fail with [`DomainError`].
///
/// # Example
///
/// ```
/// use resistorgen::bands::encode;
/// use resistorgen::ColorBand::*;
/// let bands = encode(4700.0).unwrap();
/// assert_eq!(bands.as_array(), [Yellow, Violet, Black, Brown]);
/// ```
pub fn encode(value: f64) -> Result<BandSet, DomainError> {
    let value = check_range(value)?;
    let exponent = multiplier_exponent(value);
    let multiplier = multiplier_color(exponent).ok_or(DomainError::ExponentOutOfRange {
        value,
        exponent,
    })?;
    let digits = significant_digits(value, exponent)?;

    let mut colors = [ColorBand::Black; 3];
    for (slot, digit) in colors.iter_mut().zip(digits) {
        // digits come from a number in 100..=999, so each is 0..=9
        *slot = ColorBand::from_digit(digit).ok_or(DomainError::NotThreeDigits {
            value,
            digits: f64::from(digit),
        })?;
    }
    Ok(BandSet {
        digits: colors,
        multiplier,
    })
}

/// Color of the multiplier band for `10^exponent`.
pub fn multiplier_color(exponent: i32) -> Option<ColorBand> {
    match exponent {
        MIN_EXPONENT => Some(ColorBand::Silver),
        -1 => Some(ColorBand::Gold),
        0..=MAX_EXPONENT => ColorBand::from_digit(exponent as u32),
        _ => None,
    }
}

/// `floor(log10(value) - 2)`, nudged when `log10` lands a hair off an
/// exact power of ten.
fn multiplier_exponent(value: f64) -> i32 {
    let mut exponent = (value.log10() - 2.0).floor() as i32;
    if scale(value, exponent) >= 1_000.0 {
        exponent += 1;
    } else if scale(value, exponent) < 100.0 {
        exponent -= 1;
    }
    exponent
}

/// `value / 10^exponent`, multiplying for negative exponents since
/// 10^-n is not exact in binary.
fn scale(value: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        value * 10f64.powi(-exponent)
    } else {
        value / 10f64.powi(exponent)
    }
}

fn significant_digits(value: f64, exponent: i32) -> Result<[u32; 3], DomainError> {
    let scaled = scale(value, exponent);
    let whole = scaled.round();
    if (scaled - whole).abs() > DIGIT_EPSILON || !(100.0..=999.0).contains(&whole) {
        return Err(DomainError::NotThreeDigits {
            value,
            digits: scaled,
        });
    }
    let n = whole as u32;
    Ok([n / 100, (n / 10) % 10, n % 10])
}
