//! # Materials Estimation
//!
//! The estimation engine. Each project type has its own formula module:
//!
//! - [`slab`] - Concrete slab (volume based, with rebar and mesh)
//! - [`wall`] - Block wall (elevation area based)
//! - [`floor`] - Concrete floor finish (volume based, with vapor barrier)
//! - [`column`] - Reinforced concrete column
//!
//! Every formula module exposes `materials(&Dimensions) -> Vec<MaterialQuantity>`
//! and assumes the dimensions are already validated. The entry points in this
//! module do the validation, so callers never see a partial result.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::estimate::estimate;
//!
//! let result = estimate("slab", 4.0, 3.0, 0.12).unwrap();
//! let entries = result.entries();
//! assert_eq!(entries[0], ("Concreto", "1.51 m³".to_string()));
//! assert_eq!(entries[1], ("Cemento", "10 sacos".to_string()));
//! ```

pub mod column;
pub mod floor;
pub mod slab;
pub mod wall;

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::errors::{EstimateError, EstimateResult};
use crate::format::{format_number, format_quantity, Rounding};
use crate::materials::Material;
use crate::project_type::ProjectType;
use crate::settings::{EstimatorSettings, Language, NumberStyle};
use crate::units::{CubicMeters, Kilograms, SquareMeters, Unit};

/// One line of an estimate: a material, its raw quantity, unit and rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantity {
    /// Which material
    pub material: Material,

    /// Raw computed quantity, before rounding
    pub quantity: f64,

    /// Unit of `quantity`
    pub unit: Unit,

    /// Rounding applied for display
    pub rounding: Rounding,
}

impl MaterialQuantity {
    /// Volume, shown with 2 decimals
    pub fn volume(material: Material, volume: CubicMeters) -> Self {
        MaterialQuantity {
            material,
            quantity: volume.value(),
            unit: Unit::CubicMeters,
            rounding: Rounding::MEASURE,
        }
    }

    /// Area, shown with 2 decimals
    pub fn area(material: Material, area: SquareMeters) -> Self {
        MaterialQuantity {
            material,
            quantity: area.value(),
            unit: Unit::SquareMeters,
            rounding: Rounding::MEASURE,
        }
    }

    /// Mass, rounded to the nearest kilogram
    pub fn mass(material: Material, mass: Kilograms) -> Self {
        MaterialQuantity {
            material,
            quantity: mass.value(),
            unit: Unit::Kilograms,
            rounding: Rounding::WHOLE,
        }
    }

    /// Mass, rounded up to the next kilogram
    pub fn mass_ceil(material: Material, mass: Kilograms) -> Self {
        MaterialQuantity {
            rounding: Rounding::Ceil,
            ..MaterialQuantity::mass(material, mass)
        }
    }

    /// Bags, rounded up
    pub fn bags(material: Material, bags: f64) -> Self {
        MaterialQuantity {
            material,
            quantity: bags,
            unit: Unit::Bags,
            rounding: Rounding::Ceil,
        }
    }

    /// Pieces, rounded up
    pub fn pieces(material: Material, pieces: f64) -> Self {
        MaterialQuantity {
            material,
            quantity: pieces,
            unit: Unit::Pieces,
            rounding: Rounding::Ceil,
        }
    }

    /// Quantity after rounding
    pub fn value(&self) -> f64 {
        self.rounding.apply(self.quantity)
    }

    /// Canonical quantity string, e.g. `"1.51 m³"` or `"10 sacos"`.
    pub fn formatted(&self) -> String {
        self.formatted_in(Language::Spanish)
    }

    /// Quantity string with the unit suffix in the given language.
    pub fn formatted_in(&self, language: Language) -> String {
        format!(
            "{} {}",
            format_quantity(self.quantity, self.rounding),
            self.unit.suffix(language)
        )
    }

    /// Label and quantity string for display.
    pub fn display(&self, settings: &EstimatorSettings) -> (&'static str, String) {
        let number = match settings.number_style {
            NumberStyle::Plain => format_quantity(self.quantity, self.rounding),
            NumberStyle::Grouped => format_number(self.value(), self.rounding.places() as u8),
        };
        (
            self.material.label(settings.language),
            format!("{} {}", number, self.unit.suffix(settings.language)),
        )
    }
}

/// Result of one estimate.
///
/// Materials keep the order their formula module lists them in, which follows
/// the order things are bought and placed on site.
///
/// ## JSON Example
///
/// ```json
/// {
///   "project_type": "column",
///   "dimensions": { "length_m": 0.3, "width_m": 0.3, "height_m": 3.0 },
///   "materials": [
///     { "material": "concrete", "quantity": 0.2835, "unit": "cubic_meters",
///       "rounding": { "mode": "decimals", "places": 2 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// What was estimated
    pub project_type: ProjectType,

    /// Dimensions the estimate was computed from
    pub dimensions: Dimensions,

    /// Ordered material lines, one per material
    pub materials: Vec<MaterialQuantity>,
}

impl EstimationResult {
    /// Ordered (label, quantity string) pairs with Spanish labels.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.materials
            .iter()
            .map(|m| (m.material.label(Language::Spanish), m.formatted()))
            .collect()
    }

    /// Ordered (label, quantity string) pairs rendered with the given settings.
    pub fn entries_with(&self, settings: &EstimatorSettings) -> Vec<(&'static str, String)> {
        self.materials.iter().map(|m| m.display(settings)).collect()
    }

    /// Look up the line for a material.
    pub fn get(&self, material: Material) -> Option<&MaterialQuantity> {
        self.materials.iter().find(|m| m.material == material)
    }

    /// Number of material lines
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True when no material was produced
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// A JSON-friendly estimate request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "project_type": "wall",
///   "dimensions": { "length_m": 5.0, "width_m": 0.15, "height_m": 2.5 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Element to estimate
    pub project_type: ProjectType,

    /// Element dimensions
    pub dimensions: Dimensions,
}

impl EstimateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        self.dimensions.validate()
    }

    /// Run the estimate.
    pub fn estimate(&self) -> EstimateResult<EstimationResult> {
        estimate_with(self.project_type, &self.dimensions)
    }
}

impl ProjectType {
    /// Formula outputs for this project type. Dimensions must be valid.
    pub fn materials(&self, dims: &Dimensions) -> Vec<MaterialQuantity> {
        match self {
            ProjectType::Slab => slab::materials(dims),
            ProjectType::Wall => wall::materials(dims),
            ProjectType::Floor => floor::materials(dims),
            ProjectType::Column => column::materials(dims),
        }
    }
}

/// Estimate materials from a selector token and three dimensions in meters.
///
/// Dimensions are validated first, so a bad dimension is reported as
/// `InvalidInput` whatever the selector says. An unrecognized selector is
/// reported as `UnknownProjectType`.
///
/// # Returns
///
/// * `Ok(EstimationResult)` - Ordered material lines
/// * `Err(EstimateError)` - If any input is invalid or a quantity overflows
pub fn estimate(project_type: &str, length_m: f64, width_m: f64, height_m: f64) -> EstimateResult<EstimationResult> {
    let dims = Dimensions::new(length_m, width_m, height_m)?;
    let project_type = ProjectType::from_str_flexible(project_type).inspect_err(|err| {
        tracing::warn!(error = %err, "rejected project type");
    })?;
    estimate_with(project_type, &dims)
}

/// Estimate materials for a typed project and dimensions.
pub fn estimate_with(project_type: ProjectType, dims: &Dimensions) -> EstimateResult<EstimationResult> {
    dims.validate()?;

    let materials = project_type.materials(dims);
    if let Some(line) = materials.iter().find(|m| !m.quantity.is_finite()) {
        tracing::warn!(
            project_type = %project_type,
            material = ?line.material,
            "rejected dimensions with out-of-range result"
        );
        return Err(EstimateError::invalid_input(
            "dimensions",
            format!("{} x {} x {}", dims.length_m, dims.width_m, dims.height_m),
            "Result out of range",
        ));
    }
    tracing::debug!(
        project_type = %project_type,
        length_m = dims.length_m,
        width_m = dims.width_m,
        height_m = dims.height_m,
        lines = materials.len(),
        "estimated materials"
    );

    Ok(EstimationResult {
        project_type,
        dimensions: *dims,
        materials,
    })
}
