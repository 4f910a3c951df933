//! Resistor band colors and their rendered RGB values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One colored stripe of the resistor color code.
///
/// The first ten variants are the digit colors 0–9 in order; `Gold` and
/// `Silver` carry no digit and only appear as multiplier or tolerance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// Digit colors indexed by the digit they encode.
const DIGIT_COLORS: [ColorBand; 10] = [
    ColorBand::Black,
    ColorBand::Brown,
    ColorBand::Red,
    ColorBand::Orange,
    ColorBand::Yellow,
    ColorBand::Green,
    ColorBand::Blue,
    ColorBand::Violet,
    ColorBand::Grey,
    ColorBand::White,
];

/// Red, green and blue channels in \[0, 1\].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbTriple {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbTriple {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl ColorBand {
    pub const ALL: [ColorBand; 12] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Grey,
        ColorBand::White,
        ColorBand::Gold,
        ColorBand::Silver,
    ];

    /// Color encoding `digit`, or `None` when `digit > 9`.
    pub fn from_digit(digit: u32) -> Option<ColorBand> {
        DIGIT_COLORS.get(digit as usize).copied()
    }

    /// Digit encoded by this color (`None` for gold and silver).
    pub fn digit(self) -> Option<u32> {
        DIGIT_COLORS
            .iter()
            .position(|&c| c == self)
            .map(|d| d as u32)
    }

    /// Rendered color used in the CAD model.
    pub const fn rgb(self) -> RgbTriple {
        match self {
            ColorBand::Black => RgbTriple::new(0.0, 0.0, 0.0),
            ColorBand::Brown => RgbTriple::new(0.55, 0.27, 0.07),
            ColorBand::Red => RgbTriple::new(1.0, 0.0, 0.0),
            ColorBand::Orange => RgbTriple::new(1.0, 0.65, 0.0),
            ColorBand::Yellow => RgbTriple::new(1.0, 1.0, 0.0),
            ColorBand::Green => RgbTriple::new(0.0, 0.5, 0.0),
            ColorBand::Blue => RgbTriple::new(0.0, 0.0, 1.0),
            ColorBand::Violet => RgbTriple::new(0.56, 0.0, 1.0),
            ColorBand::Grey => RgbTriple::new(0.5, 0.5, 0.5),
            ColorBand::White => RgbTriple::new(1.0, 1.0, 1.0),
            ColorBand::Gold => RgbTriple::new(0.83, 0.69, 0.22),
            ColorBand::Silver => RgbTriple::new(0.75, 0.75, 0.75),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Grey => "Grey",
            ColorBand::White => "White",
            ColorBand::Gold => "Gold",
            ColorBand::Silver => "Silver",
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_colors_round_trip() {
        for d in 0..10 {
            let color = ColorBand::from_digit(d).unwrap();
            assert_eq!(color.digit(), Some(d));
        }
        assert_eq!(ColorBand::from_digit(10), None);
    }

    #[test]
    fn test_gold_and_silver_have_no_digit() {
        assert_eq!(ColorBand::Gold.digit(), None);
        assert_eq!(ColorBand::Silver.digit(), None);
    }

    #[test]
    fn test_rgb_channels_in_unit_range() {
        for color in ColorBand::ALL {
            for channel in color.rgb().channels() {
                assert!((0.0..=1.0).contains(&channel), "{color}: {channel}");
            }
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(ColorBand::Violet.to_string(), "Violet");
        assert_eq!(ColorBand::Grey.to_string(), "Grey");
    }
}
