//! Persisted settings.
//!
//! ```toml
//! # alt-time.toml
//! default_standard = "stardate"
//! year_offset = 0
//! ```
//!
//! Both keys are optional; missing keys take their defaults (`tc`, `0`).

use crate::catalog::Standard;
#[cfg(feature = "serde")]
use alt_time_core::{AltTimeError, AltTimeResult};
#[cfg(feature = "serde")]
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "alt-time.toml";

/// User-level settings: which calendar to show by default and a whole-year
/// shift applied to every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Settings {
    pub default_standard: Standard,
    pub year_offset: i32,
}

#[cfg(feature = "serde")]
impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> AltTimeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AltTimeError::config_error(&path.display().to_string(), &e.to_string())
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            AltTimeError::ConfigError { message, .. } => {
                AltTimeError::config_error(&path.display().to_string(), &message)
            }
            other => other,
        })
    }

    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for invalid TOML, unknown keys, or an unknown
    /// standard name.
    pub fn from_toml(content: &str) -> AltTimeResult<Self> {
        toml::from_str(content).map_err(|e| AltTimeError::config_error("toml", &e.to_string()))
    }

    /// Serialize settings to TOML.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> AltTimeResult<String> {
        toml::to_string_pretty(self).map_err(|e| AltTimeError::config_error("toml", &e.to_string()))
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let settings = Settings::from_toml(
            r#"
            default_standard = "dale"
            year_offset = -10
            "#,
        )
        .unwrap();
        assert_eq!(settings.default_standard, Standard::Dale);
        assert_eq!(settings.year_offset, -10);
    }

    #[test]
    fn test_unknown_standard_is_config_error() {
        let err = Settings::from_toml(r#"default_standard = "gregorian""#).unwrap_err();
        assert!(matches!(err, AltTimeError::ConfigError { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Settings::from_toml("standard = \"tc\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings {
            default_standard: Standard::Imperial,
            year_offset: 3,
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("default_standard = \"imperial\""));
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file(Path::new("/nonexistent/alt-time.toml")).unwrap_err();
        match err {
            AltTimeError::ConfigError { source_name, .. } => {
                assert_eq!(source_name, "/nonexistent/alt-time.toml")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
