//! # Concrete Slab
//!
//! Poured slab (losa) with rebar and welded wire mesh. Concrete and
//! aggregates scale with volume; reinforcement scales with plan area.
//!
//! | Material | Formula |
//! |---|---|
//! | Concreto | V × 1.05 m³ |
//! | Cemento | ⌈V × 6.5⌉ sacos |
//! | Arena | V × 0.5 m³ |
//! | Grava | V × 0.7 m³ |
//! | Varilla | A × 8 kg |
//! | Armex | A × 1.1 m² |

use super::MaterialQuantity;
use crate::dimensions::Dimensions;
use crate::materials::Material;
use crate::units::Kilograms;

/// Concrete waste factor (5%)
pub const CONCRETE_WASTE_FACTOR: f64 = 1.05;
/// Cement bags per m³ of concrete
pub const CEMENT_BAGS_PER_M3: f64 = 6.5;
/// Sand m³ per m³ of concrete
pub const SAND_PER_M3: f64 = 0.5;
/// Gravel m³ per m³ of concrete
pub const GRAVEL_PER_M3: f64 = 0.7;
/// Rebar kg per m² of slab
pub const STEEL_KG_PER_M2: f64 = 8.0;
/// Mesh overlap factor (10%)
pub const MESH_OVERLAP_FACTOR: f64 = 1.1;

/// Material lines for a slab.
pub fn materials(dims: &Dimensions) -> Vec<MaterialQuantity> {
    let volume = dims.volume();
    let area = dims.footprint_area();

    vec![
        MaterialQuantity::volume(Material::Concrete, volume * CONCRETE_WASTE_FACTOR),
        MaterialQuantity::bags(Material::Cement, volume.value() * CEMENT_BAGS_PER_M3),
        MaterialQuantity::volume(Material::Sand, volume * SAND_PER_M3),
        MaterialQuantity::volume(Material::Gravel, volume * GRAVEL_PER_M3),
        MaterialQuantity::mass(Material::Steel, Kilograms(area.value() * STEEL_KG_PER_M2)),
        MaterialQuantity::area(Material::Mesh, area * MESH_OVERLAP_FACTOR),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_lines() {
        // V = 4 × 3 × 0.12 = 1.44 m³, A = 12 m²
        let dims = Dimensions::new(4.0, 3.0, 0.12).unwrap();
        let lines = materials(&dims);
        let formatted: Vec<String> = lines.iter().map(|m| m.formatted()).collect();
        assert_eq!(
            formatted,
            vec!["1.51 m³", "10 sacos", "0.72 m³", "1.01 m³", "96 kg", "13.20 m²"]
        );
    }

    #[test]
    fn test_slab_raw_quantities() {
        let dims = Dimensions::new(2.0, 2.0, 0.25).unwrap();
        let lines = materials(&dims);
        // V = 1 m³, A = 4 m²
        assert!((lines[0].quantity - 1.05).abs() < 1e-9);
        assert!((lines[1].quantity - 6.5).abs() < 1e-9);
        assert_eq!(lines[1].value(), 7.0);
        assert!((lines[4].quantity - 32.0).abs() < 1e-9);
        assert!((lines[5].quantity - 4.4).abs() < 1e-9);
    }
}
