//! # Concrete Floor
//!
//! Thin poured floor finish (firme) over a polyethylene vapor barrier.
//! Leaner mix than a slab and no reinforcement.

use super::MaterialQuantity;
use crate::dimensions::Dimensions;
use crate::materials::Material;

/// Concrete waste factor (5%)
pub const CONCRETE_WASTE_FACTOR: f64 = 1.05;
/// Cement bags per m³ of concrete
pub const CEMENT_BAGS_PER_M3: f64 = 5.5;
/// Sand m³ per m³ of concrete
pub const SAND_PER_M3: f64 = 0.6;
/// Gravel m³ per m³ of concrete
pub const GRAVEL_PER_M3: f64 = 0.8;
/// Vapor barrier overlap factor (10%)
pub const BARRIER_OVERLAP_FACTOR: f64 = 1.1;

/// Material lines for a floor.
pub fn materials(dims: &Dimensions) -> Vec<MaterialQuantity> {
    let volume = dims.volume();
    let area = dims.footprint_area();

    vec![
        MaterialQuantity::volume(Material::Concrete, volume * CONCRETE_WASTE_FACTOR),
        MaterialQuantity::bags(Material::Cement, volume.value() * CEMENT_BAGS_PER_M3),
        MaterialQuantity::volume(Material::Sand, volume * SAND_PER_M3),
        MaterialQuantity::volume(Material::Gravel, volume * GRAVEL_PER_M3),
        MaterialQuantity::area(Material::VaporBarrier, area * BARRIER_OVERLAP_FACTOR),
    ]
}
