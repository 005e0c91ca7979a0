//! # Dimensions
//!
//! The three measurements every estimate starts from, in meters, and the
//! field-level parsing used by input collectors.
//!
//! ## JSON Example
//!
//! ```json
//! { "length_m": 4.0, "width_m": 3.0, "height_m": 0.12 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::dimensions::Dimensions;
//!
//! let dims = Dimensions::parse("4", "3", "0.12").unwrap();
//! assert!((dims.volume().value() - 1.44).abs() < 1e-9);
//!
//! assert!(Dimensions::parse("4", "", "0.12").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::units::{CubicMeters, Meters, SquareMeters};

/// Length, width and height of the element, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in meters
    pub length_m: f64,

    /// Width in meters (ignored for walls)
    pub width_m: f64,

    /// Height or thickness in meters
    pub height_m: f64,
}

impl Dimensions {
    /// Build and validate dimensions.
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> EstimateResult<Self> {
        let dims = Dimensions {
            length_m,
            width_m,
            height_m,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Parse three raw form values.
    pub fn parse(length: &str, width: &str, height: &str) -> EstimateResult<Self> {
        Ok(Dimensions {
            length_m: parse_dimension("length", length)?,
            width_m: parse_dimension("width", width)?,
            height_m: parse_dimension("height", height)?,
        })
    }

    /// Validate input parameters.
    ///
    /// Fields are checked in length, width, height order and the first
    /// failure is returned.
    pub fn validate(&self) -> EstimateResult<()> {
        check_positive("length", self.length_m)?;
        check_positive("width", self.width_m)?;
        check_positive("height", self.height_m)?;
        Ok(())
    }

    /// Length as a typed quantity
    pub fn length(&self) -> Meters {
        Meters(self.length_m)
    }

    /// Width as a typed quantity
    pub fn width(&self) -> Meters {
        Meters(self.width_m)
    }

    /// Height as a typed quantity
    pub fn height(&self) -> Meters {
        Meters(self.height_m)
    }

    /// Plan area L × W
    pub fn footprint_area(&self) -> SquareMeters {
        self.length() * self.width()
    }

    /// Elevation area L × H, used for walls
    pub fn elevation_area(&self) -> SquareMeters {
        self.length() * self.height()
    }

    /// Volume L × W × H
    pub fn volume(&self) -> CubicMeters {
        self.footprint_area() * self.height()
    }
}

/// Parse a single raw form value.
///
/// Empty input is "missing", anything that is not a number is rejected,
/// and the number must be finite and strictly positive.
pub fn parse_dimension(field: &str, raw: &str) -> EstimateResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::warn!(field, "rejected missing dimension");
        return Err(EstimateError::invalid_input(field, raw, "Value is required"));
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        tracing::warn!(field, raw, "rejected non-numeric dimension");
        EstimateError::invalid_input(field, raw, "Value is not a number")
    })?;
    check_positive(field, value)?;
    Ok(value)
}

fn check_positive(field: &str, value: f64) -> EstimateResult<()> {
    if !value.is_finite() {
        tracing::warn!(field, value, "rejected non-finite dimension");
        return Err(EstimateError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        tracing::warn!(field, value, "rejected non-positive dimension");
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_geometry() {
        let dims = Dimensions::new(5.0, 0.15, 2.5).unwrap();
        assert!((dims.footprint_area().value() - 0.75).abs() < 1e-12);
        assert!((dims.elevation_area().value() - 12.5).abs() < 1e-12);
        assert!((dims.volume().value() - 1.875).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Dimensions::new(4.0, 0.0, 0.12).unwrap_err();
        assert_eq!(err.field(), "width");
        assert!(Dimensions::new(-1.0, 3.0, 0.12).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Dimensions::new(f64::NAN, 3.0, 0.12).is_err());
        assert!(Dimensions::new(4.0, f64::INFINITY, 0.12).is_err());
        assert!(Dimensions::new(4.0, 3.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = Dimensions::new(0.0, -1.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), "length");
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("length", " 4.5 ").unwrap(), 4.5);
        assert!(parse_dimension("length", "").is_err());
        assert!(parse_dimension("length", "   ").is_err());
        assert!(parse_dimension("length", "abc").is_err());
        assert!(parse_dimension("length", "0").is_err());
        assert!(parse_dimension("length", "-2").is_err());
        assert!(parse_dimension("length", "NaN").is_err());
        assert!(parse_dimension("length", "inf").is_err());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_every_rejection_is_logged() {
        let logs = captured_logs(|| {
            assert!(parse_dimension("length", "").is_err());
            assert!(parse_dimension("width", "abc").is_err());
            assert!(parse_dimension("height", "-1").is_err());
            assert!(parse_dimension("height", "inf").is_err());
        });
        assert!(logs.contains("rejected missing dimension"), "{logs}");
        assert!(logs.contains("rejected non-numeric dimension"), "{logs}");
        assert!(logs.contains("rejected non-positive dimension"), "{logs}");
        assert!(logs.contains("rejected non-finite dimension"), "{logs}");
    }

    #[test]
    fn test_parse_reports_field() {
        let err = Dimensions::parse("4", "x", "0.12").unwrap_err();
        match err {
            EstimateError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "width");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serialization() {
        let dims = Dimensions::new(4.0, 3.0, 0.12).unwrap();
        let json = serde_json::to_string(&dims).unwrap();
        let roundtrip: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, roundtrip);
    }
}
