//! # Presentation Settings
//!
//! Settings that affect how a result is displayed, never what is computed.
//! The engine output is identical for every setting; only
//! [`MaterialQuantity::display`](crate::estimate::MaterialQuantity::display)
//! consults them.
//!
//! ## TOML Example
//!
//! ```toml
//! language = "en"
//! number_style = "grouped"
//! ```

use serde::{Deserialize, Serialize};

/// Language used for material labels and count units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Spanish (the site's language)
    #[default]
    #[serde(rename = "es")]
    Spanish,
    /// English
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Parse "es"/"en" and a few common spellings.
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "es" | "es-mx" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            "en" | "en-us" | "english" | "inglés" | "ingles" => Some(Language::English),
            _ => None,
        }
    }
}

/// How numbers are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// `12345.60`
    #[default]
    Plain,
    /// `12,345.60` (es-MX grouping)
    Grouped,
}

/// Display settings for the result renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Label and unit language
    pub language: Language,

    /// Number rendering style
    pub number_style: NumberStyle,
}

impl EstimatorSettings {
    /// Settings with the given language and default number style.
    pub fn with_language(language: Language) -> Self {
        EstimatorSettings {
            language,
            ..Default::default()
        }
    }
}
