//! # Materials
//!
//! Identities of the materials an estimate can list. Labels are looked up
//! per language so results never carry free-form strings as keys.

use serde::{Deserialize, Serialize};

use crate::settings::Language;

/// A purchasable construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Ready-mix or site-mixed concrete
    Concrete,
    /// Portland cement, sold in bags
    Cement,
    /// Sand
    Sand,
    /// Gravel
    Gravel,
    /// Reinforcing bar (varilla)
    Steel,
    /// Welded wire mesh (Armex)
    Mesh,
    /// Concrete masonry blocks
    Blocks,
    /// Masonry mortar
    Mortar,
    /// Annealed tie wire (alambre recocido)
    TieWire,
    /// Polyethylene sheet under a floor
    VaporBarrier,
    /// Main column bars
    LongitudinalSteel,
    /// Column ties (estribos)
    Stirrups,
}

impl Material {
    /// Label shown next to the quantity
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Spanish => self.label_es(),
            Language::English => self.label_en(),
        }
    }

    fn label_es(&self) -> &'static str {
        match self {
            Material::Concrete => "Concreto",
            Material::Cement => "Cemento",
            Material::Sand => "Arena",
            Material::Gravel => "Grava",
            Material::Steel => "Varilla",
            Material::Mesh => "Armex",
            Material::Blocks => "Blocks",
            Material::Mortar => "Mortero",
            Material::TieWire => "Alambre recocido",
            Material::VaporBarrier => "Polietileno",
            Material::LongitudinalSteel => "Varilla longitudinal",
            Material::Stirrups => "Estribos",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Material::Concrete => "Concrete",
            Material::Cement => "Cement",
            Material::Sand => "Sand",
            Material::Gravel => "Gravel",
            Material::Steel => "Rebar",
            Material::Mesh => "Wire mesh",
            Material::Blocks => "Blocks",
            Material::Mortar => "Mortar",
            Material::TieWire => "Tie wire",
            Material::VaporBarrier => "Vapor barrier",
            Material::LongitudinalSteel => "Longitudinal rebar",
            Material::Stirrups => "Stirrups",
        }
    }
}
