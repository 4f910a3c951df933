//! Tolerance band lookup.

use crate::color::ColorBand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Unsupported tolerance: {0}%")]
pub struct UnsupportedToleranceError(pub f64);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseToleranceError {
    #[error("Invalid tolerance: {0}")]
    Invalid(String),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedToleranceError),
}

/// The seven tolerances that have a band color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tolerance {
    TenthPercent,
    QuarterPercent,
    HalfPercent,
    OnePercent,
    TwoPercent,
    FivePercent,
    TenPercent,
}

/// One row of the tolerance table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceSpec {
    pub percent: f64,
    pub color: ColorBand,
    pub name: &'static str,
}

impl Tolerance {
    pub const ALL: [Tolerance; 7] = [
        Tolerance::TenthPercent,
        Tolerance::QuarterPercent,
        Tolerance::HalfPercent,
        Tolerance::OnePercent,
        Tolerance::TwoPercent,
        Tolerance::FivePercent,
        Tolerance::TenPercent,
    ];

    pub const fn spec(self) -> ToleranceSpec {
        let (percent, color, name) = match self {
            Tolerance::TenthPercent => (0.1, ColorBand::Violet, "TenthPercentTolerance"),
            Tolerance::QuarterPercent => (0.25, ColorBand::Blue, "QuarterPercentTolerance"),
            Tolerance::HalfPercent => (0.5, ColorBand::Green, "HalfPercentTolerance"),
            Tolerance::OnePercent => (1.0, ColorBand::Brown, "OnePercentTolerance"),
            Tolerance::TwoPercent => (2.0, ColorBand::Red, "TwoPercentTolerance"),
            Tolerance::FivePercent => (5.0, ColorBand::Gold, "FivePercentTolerance"),
            Tolerance::TenPercent => (10.0, ColorBand::Silver, "TenPercentTolerance"),
        };
        ToleranceSpec {
            percent,
            color,
            name,
        }
    }

    pub const fn percent(self) -> f64 {
        self.spec().percent
    }

    pub const fn color(self) -> ColorBand {
        self.spec().color
    }

    /// Name used in artifact file names, e.g. `OnePercentTolerance`.
    pub const fn display_name(self) -> &'static str {
        self.spec().name
    }

    /// Look up the tolerance for a percentage. No rounding to the nearest
    /// entry is done.
    pub fn from_percent(percent: f64) -> Result<Tolerance, UnsupportedToleranceError> {
        Tolerance::ALL
            .into_iter()
            .find(|t| t.percent() == percent)
            .ok_or(UnsupportedToleranceError(percent))
    }
}

/// Band color and display name for `percent`.
pub fn resolve(percent: f64) -> Result<(ColorBand, &'static str), UnsupportedToleranceError> {
    let tolerance = Tolerance::from_percent(percent)?;
    Ok((tolerance.color(), tolerance.display_name()))
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Parses `"1"`, `"0.25"` or `"5%"`.
impl FromStr for Tolerance {
    type Err = ParseToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        let percent: f64 = trimmed
            .parse()
            .map_err(|_| ParseToleranceError::Invalid(s.to_string()))?;
        Ok(Tolerance::from_percent(percent)?)
    }
}
