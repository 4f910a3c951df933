//! Artifact file names.

use crate::tolerance::Tolerance;

pub const DEFAULT_EXTENSION: &str = "step";

/// `Resistor_<label>_<tolerance name>.<ext>`, e.g.
/// `Resistor_4K7_OnePercentTolerance.step`.
pub fn file_name(label: &str, tolerance: Tolerance, extension: &str) -> String {
    format!(
        "Resistor_{}_{}.{}",
        label,
        tolerance.display_name(),
        extension.trim_start_matches('.')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("4K7", Tolerance::OnePercent, DEFAULT_EXTENSION),
            "Resistor_4K7_OnePercentTolerance.step"
        );
    }

    #[test]
    fn test_file_name_accepts_dotted_extension() {
        assert_eq!(
            file_name("100R", Tolerance::TwoPercent, ".stp"),
            "Resistor_100R_TwoPercentTolerance.stp"
        );
    }
}
