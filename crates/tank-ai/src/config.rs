//! Strategy configuration and its TOML loader.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tunable parameters shared by every strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    /// Seconds between perception samples while a perception service is active.
    pub perception_period: f32,
    /// Lateral offset at or below which the target counts as centred.
    pub centred_threshold: f32,
    /// Turn rate of the fallback tree used for unknown behavior ids.
    pub default_turn_rate: f32,
}

impl BrainConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PERCEPTION_PERIOD: f32 = 0.2;
    pub const DEFAULT_CENTRED_THRESHOLD: f32 = 0.1;
    pub const DEFAULT_TURN_RATE: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            perception_period: Self::DEFAULT_PERCEPTION_PERIOD,
            centred_threshold: Self::DEFAULT_CENTRED_THRESHOLD,
            default_turn_rate: Self::DEFAULT_TURN_RATE,
        }
    }

    /// Parses and validates a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;

        tracing::debug!(path = %path.display(), ?config, "loaded brain config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.perception_period.is_finite() && self.perception_period > 0.0) {
            return Err(ConfigError::Invalid {
                field: "perception_period",
                reason: "must be a positive number of seconds",
            });
        }
        if !(self.centred_threshold.is_finite() && self.centred_threshold >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "centred_threshold",
                reason: "must be non-negative",
            });
        }
        if !(-1.0..=1.0).contains(&self.default_turn_rate) {
            return Err(ConfigError::Invalid {
                field: "default_turn_rate",
                reason: "must be within [-1, 1]",
            });
        }
        Ok(())
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = BrainConfig::from_toml_str("perception_period = 0.5").unwrap();
        assert_eq!(config.perception_period, 0.5);
        assert_eq!(config.centred_threshold, BrainConfig::DEFAULT_CENTRED_THRESHOLD);
        assert_eq!(config.default_turn_rate, BrainConfig::DEFAULT_TURN_RATE);
    }

    #[test]
    fn rejects_non_positive_period() {
        let err = BrainConfig::from_toml_str("perception_period = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "perception_period",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_turn_rate() {
        let err = BrainConfig::from_toml_str("default_turn_rate = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "default_turn_rate", .. }));
    }

    #[test]
    fn reports_parse_errors() {
        let err = BrainConfig::from_toml_str("perception_period = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "centred_threshold = 0.05").unwrap();

        let config = BrainConfig::load(file.path()).unwrap();
        assert_eq!(config.centred_threshold, 0.05);
        assert_eq!(config.perception_period, BrainConfig::DEFAULT_PERCEPTION_PERIOD);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BrainConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
