//! # Unit Types
//!
//! Type-safe wrappers for the metric units the estimator works in, plus the
//! [`Unit`] tag attached to every computed quantity.
//!
//! All geometry is in meters. Derived quantities are volumes (m³), areas (m²),
//! masses (kg) and whole-unit counts (bags of cement, masonry pieces).
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::units::{Meters, SquareMeters, CubicMeters};
//!
//! let area: SquareMeters = Meters(4.0) * Meters(3.0);
//! let volume: CubicMeters = area * Meters(0.12);
//! assert!((volume.value() - 1.44).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::settings::Language;

// ============================================================================
// Quantity Newtypes
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Kilograms);

// ============================================================================
// Unit Tags
// ============================================================================

/// Unit attached to a computed material quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// m³
    CubicMeters,
    /// m²
    SquareMeters,
    /// kg
    Kilograms,
    /// Whole bags of cement
    Bags,
    /// Whole masonry pieces
    Pieces,
}

impl Unit {
    /// Suffix printed after the number.
    ///
    /// Metric symbols are language-neutral; counts are spelled out.
    pub fn suffix(&self, language: Language) -> &'static str {
        match (self, language) {
            (Unit::CubicMeters, _) => "m³",
            (Unit::SquareMeters, _) => "m²",
            (Unit::Kilograms, _) => "kg",
            (Unit::Bags, Language::Spanish) => "sacos",
            (Unit::Bags, Language::English) => "bags",
            (Unit::Pieces, Language::Spanish) => "piezas",
            (Unit::Pieces, Language::English) => "pieces",
        }
    }
}
