//! # Project Types
//!
//! The fixed set of construction elements the estimator knows how to price.
//! Selector tokens from the outside world are parsed here; once a
//! [`ProjectType`] exists, every dispatch on it is an exhaustive match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::settings::Language;

/// Construction element being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Poured-concrete slab (losa), computed by volume
    Slab,
    /// Block masonry wall (muro), computed by length × height
    Wall,
    /// Thin concrete floor finish (firme)
    Floor,
    /// Reinforced concrete column (columna)
    Column,
}

impl ProjectType {
    /// All project types, in the order the site lists them
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Slab,
        ProjectType::Wall,
        ProjectType::Floor,
        ProjectType::Column,
    ];

    /// Canonical selector token
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Slab => "slab",
            ProjectType::Wall => "wall",
            ProjectType::Floor => "floor",
            ProjectType::Column => "column",
        }
    }

    /// Parse a selector token.
    ///
    /// Accepts the English codes and the site's Spanish form values,
    /// case-insensitive, ignoring surrounding whitespace.
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "slab" | "losa" => Ok(ProjectType::Slab),
            "wall" | "muro" => Ok(ProjectType::Wall),
            "floor" | "firme" => Ok(ProjectType::Floor),
            "column" | "columna" => Ok(ProjectType::Column),
            _ => Err(EstimateError::unknown_project_type(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (ProjectType::Slab, Language::Spanish) => "Losa de concreto",
            (ProjectType::Wall, Language::Spanish) => "Muro de block",
            (ProjectType::Floor, Language::Spanish) => "Firme de concreto",
            (ProjectType::Column, Language::Spanish) => "Columna",
            (ProjectType::Slab, Language::English) => "Concrete slab",
            (ProjectType::Wall, Language::English) => "Block wall",
            (ProjectType::Floor, Language::English) => "Concrete floor",
            (ProjectType::Column, Language::English) => "Column",
        }
    }

    /// Whether the width dimension takes part in the estimate.
    pub fn uses_width(&self) -> bool {
        !matches!(self, ProjectType::Wall)
    }
}

impl FromStr for ProjectType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::from_str_flexible(s)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
