//! # Block Wall
//!
//! Masonry wall (muro) laid with concrete blocks. Everything is driven by
//! the elevation area A = length × height; width is ignored.
//!
//! Vertical reinforcement assumes a bar line every 3 m of wall length.

use super::MaterialQuantity;
use crate::dimensions::Dimensions;
use crate::materials::Material;
use crate::units::{CubicMeters, Kilograms};

/// Blocks per m² of wall
pub const BLOCKS_PER_M2: f64 = 13.0;
/// Mortar m³ per m² of wall
pub const MORTAR_M3_PER_M2: f64 = 0.02;
/// Cement bags per m³ of mortar
pub const CEMENT_BAGS_PER_M3_MORTAR: f64 = 8.0;
/// Sand m³ per m³ of mortar
pub const SAND_PER_M3_MORTAR: f64 = 4.0;
/// Spacing between vertical bar lines, in meters
pub const STEEL_LINE_SPACING_M: f64 = 3.0;
/// Rebar kg per meter of height, per bar line
pub const STEEL_KG_PER_LINE_M: f64 = 4.0;
/// Blocks tied per kg of tie wire
pub const BLOCKS_PER_KG_TIE_WIRE: f64 = 50.0;

/// Material lines for a wall.
pub fn materials(dims: &Dimensions) -> Vec<MaterialQuantity> {
    let area = dims.elevation_area();

    let blocks = (area.value() * BLOCKS_PER_M2).ceil();
    let mortar = area.value() * MORTAR_M3_PER_M2;
    let cement_bags = mortar * CEMENT_BAGS_PER_M3_MORTAR;
    let sand = mortar * SAND_PER_M3_MORTAR;
    let steel = (dims.length_m / STEEL_LINE_SPACING_M) * dims.height_m * STEEL_KG_PER_LINE_M;
    // Tie wire follows the purchased (already rounded up) block count
    let tie_wire = blocks / BLOCKS_PER_KG_TIE_WIRE;

    vec![
        MaterialQuantity::pieces(Material::Blocks, blocks),
        MaterialQuantity::volume(Material::Mortar, CubicMeters(mortar)),
        MaterialQuantity::bags(Material::Cement, cement_bags),
        MaterialQuantity::volume(Material::Sand, CubicMeters(sand)),
        MaterialQuantity::mass(Material::Steel, Kilograms(steel)),
        MaterialQuantity::mass_ceil(Material::TieWire, Kilograms(tie_wire)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_lines() {
        // A = 5 × 2.5 = 12.5 m²
        let dims = Dimensions::new(5.0, 0.15, 2.5).unwrap();
        let formatted: Vec<String> = materials(&dims).iter().map(|m| m.formatted()).collect();
        assert_eq!(
            formatted,
            vec!["163 piezas", "0.25 m³", "2 sacos", "1.00 m³", "17 kg", "4 kg"]
        );
    }

    #[test]
    fn test_width_is_ignored() {
        let thin = materials(&Dimensions::new(6.0, 0.12, 2.4).unwrap());
        let thick = materials(&Dimensions::new(6.0, 0.20, 2.4).unwrap());
        assert_eq!(thin, thick);
    }

    #[test]
    fn test_tie_wire_uses_rounded_blocks() {
        // A = 1 m² → 13 blocks → 13 / 50 = 0.26 → 1 kg
        let lines = materials(&Dimensions::new(1.0, 0.15, 1.0).unwrap());
        assert_eq!(lines[0].value(), 13.0);
        assert!((lines[5].quantity - 0.26).abs() < 1e-12);
        assert_eq!(lines[5].formatted(), "1 kg");
    }
}
