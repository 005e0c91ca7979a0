//! # Reinforced Concrete Column
//!
//! Cast-in-place column (columna). Richer mix and a high steel ratio:
//! main bars scale with volume, stirrups with height.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::dimensions::Dimensions;
//! use estimator_core::estimate::column;
//!
//! let dims = Dimensions::new(0.3, 0.3, 3.0).unwrap();
//! let lines = column::materials(&dims);
//! assert_eq!(lines[4].formatted(), "32 kg");
//! ```

use super::MaterialQuantity;
use crate::dimensions::Dimensions;
use crate::materials::Material;
use crate::units::Kilograms;

/// Concrete waste factor (5%)
pub const CONCRETE_WASTE_FACTOR: f64 = 1.05;
/// Cement bags per m³ of concrete
pub const CEMENT_BAGS_PER_M3: f64 = 7.0;
/// Sand m³ per m³ of concrete
pub const SAND_PER_M3: f64 = 0.45;
/// Gravel m³ per m³ of concrete
pub const GRAVEL_PER_M3: f64 = 0.65;
/// Main bar kg per m³ of column
pub const LONGITUDINAL_STEEL_KG_PER_M3: f64 = 120.0;
/// Stirrup kg per meter of height
pub const STIRRUP_KG_PER_M: f64 = 2.0;
/// Main bar kg tied per kg of tie wire
pub const STEEL_KG_PER_KG_TIE_WIRE: f64 = 100.0;

/// Material lines for a column.
pub fn materials(dims: &Dimensions) -> Vec<MaterialQuantity> {
    let volume = dims.volume();

    let longitudinal = Kilograms(volume.value() * LONGITUDINAL_STEEL_KG_PER_M3);
    let stirrups = Kilograms(dims.height_m * STIRRUP_KG_PER_M);
    // Tie wire follows the unrounded main bar mass
    let tie_wire = longitudinal / STEEL_KG_PER_KG_TIE_WIRE;

    vec![
        MaterialQuantity::volume(Material::Concrete, volume * CONCRETE_WASTE_FACTOR),
        MaterialQuantity::bags(Material::Cement, volume.value() * CEMENT_BAGS_PER_M3),
        MaterialQuantity::volume(Material::Sand, volume * SAND_PER_M3),
        MaterialQuantity::volume(Material::Gravel, volume * GRAVEL_PER_M3),
        MaterialQuantity::mass(Material::LongitudinalSteel, longitudinal),
        MaterialQuantity::mass(Material::Stirrups, stirrups),
        MaterialQuantity::mass_ceil(Material::TieWire, tie_wire),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lines() {
        // V = 0.3 × 0.3 × 3 = 0.27 m³
        let dims = Dimensions::new(0.3, 0.3, 3.0).unwrap();
        let formatted: Vec<String> = materials(&dims).iter().map(|m| m.formatted()).collect();
        assert_eq!(
            formatted,
            vec!["0.28 m³", "2 sacos", "0.12 m³", "0.18 m³", "32 kg", "6 kg", "1 kg"]
        );
    }

    #[test]
    fn test_tie_wire_from_unrounded_steel() {
        // V = 0.5 × 0.5 × 4 = 1 m³ → 120 kg → 1.2 → 2 kg
        let lines = materials(&Dimensions::new(0.5, 0.5, 4.0).unwrap());
        assert_eq!(lines[4].formatted(), "120 kg");
        assert_eq!(lines[5].formatted(), "8 kg");
        assert_eq!(lines[6].formatted(), "2 kg");
    }
}
