//! Engineering-notation labels such as `4K7`, `100R` and `1M`.
//!
//! The SI prefix letter takes the place of the decimal point, so a label
//! never contains `.` and can be used verbatim in file names.

use crate::domain::{check_range, DomainError};

/// Magnitude tier of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Ohms, no scaling.
    Ohms,
    /// Kilo-ohms.
    Kilo,
    /// Mega-ohms.
    Mega,
}

impl Tier {
    pub fn for_value(value: f64) -> Tier {
        if value < 1_000.0 {
            Tier::Ohms
        } else if value < 1_000_000.0 {
            Tier::Kilo
        } else {
            Tier::Mega
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Tier::Ohms => 'R',
            Tier::Kilo => 'K',
            Tier::Mega => 'M',
        }
    }

    pub const fn divisor(self) -> f64 {
        match self {
            Tier::Ohms => 1.0,
            Tier::Kilo => 1_000.0,
            Tier::Mega => 1_000_000.0,
        }
    }
}

/// Format `value` (1 Ω ..= 10 MΩ) as an engineering label.
///
/// # Example
///
/// ```
/// use resistorgen::notation::format;
/// assert_eq!(format(4700.0).unwrap(), "4K7");
/// assert_eq!(format(100.0).unwrap(), "100R");
/// ```
pub fn format(value: f64) -> Result<String, DomainError> {
    let value = check_range(value)?;
    let tier = Tier::for_value(value);
    // `Display` for f64 is the shortest text that parses back to the same
    // value and drops a trailing ".0".
    let digits = (value / tier.divisor()).to_string();
    let letter = tier.letter();
    let label = match digits.find('.') {
        Some(_) => digits.replacen('.', &letter.to_string(), 1),
        None => format!("{digits}{letter}"),
    };
    Ok(label)
}
