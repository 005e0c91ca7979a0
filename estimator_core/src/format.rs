//! # Quantity Formatting
//!
//! Rounding rules and number rendering for computed quantities.
//!
//! - Volumes and areas: 2 decimals, nearest
//! - Masses: whole kilograms, nearest
//! - Bags and pieces: always rounded up, partial units cannot be bought
//!
//! "Nearest" resolves ties away from zero, so `2.5 kg` prints as `3`.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::format::{format_number, format_quantity, Rounding};
//!
//! assert_eq!(format_quantity(1.512, Rounding::Decimals(2)), "1.51");
//! assert_eq!(format_quantity(9.36, Rounding::Ceil), "10");
//! assert_eq!(format_number(12345.6, 2), "12,345.60");
//! ```

use serde::{Deserialize, Serialize};

/// How a raw quantity is rounded before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "places", rename_all = "snake_case")]
pub enum Rounding {
    /// Nearest value with this many decimal places
    Decimals(u8),
    /// Next whole unit
    Ceil,
}

impl Rounding {
    /// Two decimals, for m³ and m²
    pub const MEASURE: Rounding = Rounding::Decimals(2);

    /// Whole units, nearest, for kg
    pub const WHOLE: Rounding = Rounding::Decimals(0);

    /// Apply the rounding to a raw value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Decimals(_) => self.render(value).parse().unwrap_or(value),
            Rounding::Ceil => value.ceil(),
        }
    }

    /// Rounded value as plain text.
    ///
    /// Rounding works on the exact binary value, so `0.045` (stored just
    /// below the half) becomes `0.04`. Values sitting exactly on a half
    /// round away from zero.
    fn render(&self, value: f64) -> String {
        match self {
            Rounding::Decimals(places) => {
                let places = usize::from(*places);
                if is_exact_tie(value, places) {
                    let factor = 10f64.powi(places as i32);
                    format!("{:.*}", places, (value * factor).round() / factor)
                } else {
                    format!("{:.*}", places, value)
                }
            }
            Rounding::Ceil => format!("{:.0}", value.ceil()),
        }
    }

    /// Number of decimals printed after rounding.
    pub fn places(&self) -> usize {
        match self {
            Rounding::Decimals(places) => usize::from(*places),
            Rounding::Ceil => 0,
        }
    }
}

/// A value lies exactly halfway between two `places`-decimal numbers only
/// when `value × 2^(places+1)` is an odd integer.
fn is_exact_tie(value: f64, places: usize) -> bool {
    let scaled = value * 2f64.powi(places as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled.rem_euclid(2.0) == 1.0
}

/// Round and render a quantity without grouping separators.
pub fn format_quantity(value: f64, rounding: Rounding) -> String {
    rounding.render(value)
}

/// Render a number es-MX style: fixed decimals, `,` between thousands,
/// `.` before the decimals.
pub fn format_number(value: f64, decimals: u8) -> String {
    let plain = format_quantity(value, Rounding::Decimals(decimals));
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_quantity(1.512, Rounding::MEASURE), "1.51");
        assert_eq!(format_quantity(1.008, Rounding::MEASURE), "1.01");
        assert_eq!(format_quantity(13.200000000000001, Rounding::MEASURE), "13.20");
        assert_eq!(format_quantity(1.0, Rounding::MEASURE), "1.00");
    }

    #[test]
    fn test_whole_rounds_to_nearest() {
        assert_eq!(format_quantity(16.666_666, Rounding::WHOLE), "17");
        assert_eq!(format_quantity(32.4, Rounding::WHOLE), "32");
        assert_eq!(format_quantity(2.5, Rounding::WHOLE), "3");
    }

    #[test]
    fn test_near_half_rounds_on_stored_value() {
        // 0.045 is stored as 0.04499999...
        assert_eq!(format_quantity(0.045, Rounding::MEASURE), "0.04");
        assert_eq!(format_quantity(0.01 * 3.0 * 3.0 * 0.5, Rounding::MEASURE), "0.04");
        assert_eq!(format_quantity(0.08 * 2.35 * 2.5 * 0.5, Rounding::MEASURE), "0.23");
        assert!((Rounding::MEASURE.apply(0.045) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_exact_half_rounds_away_from_zero() {
        assert_eq!(format_quantity(0.125, Rounding::MEASURE), "0.13");
        assert_eq!(format_quantity(0.5, Rounding::WHOLE), "1");
        assert_eq!(format_quantity(-2.5, Rounding::WHOLE), "-3");
        assert_eq!(Rounding::WHOLE.apply(2.5), 3.0);
    }

    #[test]
    fn test_ceil() {
        assert_eq!(format_quantity(9.36, Rounding::Ceil), "10");
        assert_eq!(format_quantity(2.0, Rounding::Ceil), "2");
        assert_eq!(format_quantity(0.01, Rounding::Ceil), "1");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.5, 2), "0.50");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-12345.0, 1), "-12,345.0");
    }

    #[test]
    fn test_rounding_serialization() {
        let json = serde_json::to_string(&Rounding::Decimals(2)).unwrap();
        assert_eq!(json, r#"{"mode":"decimals","places":2}"#);
        let json = serde_json::to_string(&Rounding::Ceil).unwrap();
        assert_eq!(json, r#"{"mode":"ceil"}"#);
    }
}
