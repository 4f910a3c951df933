//! E24 preferred-value series.

/// E24 mantissas in series order.
pub const BASE_VALUES: [u32; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, 22, 24, 27, 30, 33, 36, 39, 43, 47, 51, 56, 62, 68, 75, 82, 91,
];

/// Decade exponents applied to the mantissas, lowest first.
const DECADE_EXPONENTS: std::ops::RangeInclusive<i32> = -1..=5;

/// Value appended after the last decade.
pub const TERMINAL_VALUE: f64 = 10_000_000.0;

/// 24 mantissas × 7 decades + the terminal value.
pub const SERIES_LEN: usize = BASE_VALUES.len() * 7 + 1;

/// Generate every E24 value from 1 Ω to 10 MΩ.
///
/// Ordering is part of the contract: decades ascending, and within a decade
/// the mantissas in [`BASE_VALUES`] order, followed by [`TERMINAL_VALUE`].
pub fn generate() -> Vec<f64> {
    let mut values = Vec::with_capacity(SERIES_LEN);
    for exponent in DECADE_EXPONENTS {
        let multiplier = 10f64.powi(exponent);
        for base in BASE_VALUES {
            values.push(round2(f64::from(base) * multiplier));
        }
    }
    values.push(TERMINAL_VALUE);
    values
}

/// Whether `value` is exactly a member of the generated series.
///
/// Builds the series on every call; check many values against one
/// [`generate`] result instead.
pub fn contains(value: f64) -> bool {
    generate().contains(&value)
}

// Products like 11 × 0.1 pick up binary noise; two decimals is more than
// any E24 value needs.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length() {
        assert_eq!(generate().len(), 169);
        assert_eq!(SERIES_LEN, 169);
    }

    #[test]
    fn test_series_endpoints() {
        let values = generate();
        assert_eq!(values[0], 1.0);
        assert_eq!(values[23], 9.1);
        assert_eq!(values[24], 10.0);
        assert_eq!(*values.last().unwrap(), 10_000_000.0);
    }

    #[test]
    fn test_series_strictly_increasing_within_decade() {
        let values = generate();
        for decade in values[..168].chunks(24) {
            for pair in decade.windows(2) {
                assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_rounding_removes_float_noise() {
        let values = generate();
        assert!(values.contains(&1.1));
        assert!(values.contains(&3.3));
        assert!(values.contains(&4700.0));
        assert!(values.contains(&9_100_000.0));
    }

    #[test]
    fn test_contains() {
        assert!(contains(4700.0));
        assert!(contains(1.0));
        assert!(contains(10_000_000.0));
        assert!(!contains(4800.0));
        assert!(!contains(0.5));
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(!contains(4700.004));
        assert!(!contains(1.001));
        assert!(!contains(9_999_999.999));
    }
}
