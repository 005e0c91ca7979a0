//! # estimator_core - Construction Materials Estimation Engine
//!
//! `estimator_core` turns a project type and three dimensions into an ordered
//! list of construction materials (concrete, cement, sand, rebar, blocks...)
//! with quantities ready to display. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Typed**: Project types, materials and units are enums, not strings
//! - **Atomic**: Inputs are validated before anything is computed
//! - **Ordered**: Materials come back in a fixed per-type order
//!
//! ## Quick Start
//!
//! ```rust
//! use estimator_core::estimate;
//!
//! let result = estimate("wall", 5.0, 0.15, 2.5).unwrap();
//! for (label, quantity) in result.entries() {
//!     println!("{label}: {quantity}");
//! }
//! assert_eq!(result.entries()[0], ("Blocks", "163 piezas".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`estimate`] - The engine and per-type formulas
//! - [`project_type`] - Slab, wall, floor, column selector
//! - [`dimensions`] - Validated dimensions and form-value parsing
//! - [`materials`] - Material identities and labels
//! - [`format`] - Rounding and number rendering
//! - [`units`] - Type-safe unit wrappers
//! - [`settings`] - Display language and number style
//! - [`errors`] - Structured error types

pub mod dimensions;
pub mod errors;
pub mod estimate;
pub mod format;
pub mod materials;
pub mod project_type;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use dimensions::{parse_dimension, Dimensions};
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{estimate, estimate_with, EstimateInput, EstimationResult, MaterialQuantity};
pub use materials::Material;
pub use project_type::ProjectType;
pub use settings::{EstimatorSettings, Language, NumberStyle};
