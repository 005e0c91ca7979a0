//! Settings file loading.
//!
//! The file is optional TOML holding [`EstimatorSettings`]; any key left out
//! keeps its default.

use std::fs;
use std::path::Path;

use estimator_core::EstimatorSettings;
use thiserror::Error;

/// Failure to read or parse a settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read settings '{path}': {reason}")]
    Read { path: String, reason: String },

    /// The file is not valid settings TOML
    #[error("invalid settings '{path}': {reason}")]
    Parse { path: String, reason: String },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<EstimatorSettings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_settings(&text).map_err(|reason| ConfigError::Parse {
        path: path.display().to_string(),
        reason,
    })
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<EstimatorSettings, String> {
    toml::from_str(text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimator_core::{Language, NumberStyle};

    #[test]
    fn test_full_settings() {
        let settings = parse_settings("language = \"en\"\nnumber_style = \"grouped\"\n").unwrap();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.number_style, NumberStyle::Grouped);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_settings("").unwrap(), EstimatorSettings::default());
    }

    #[test]
    fn test_bad_value() {
        assert!(parse_settings("language = \"fr\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_settings(Path::new("/nonexistent/estimator.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
