//! Config loading, validation, and conversion.

use super::model::Config;
use crate::error::{PresetError, Result};
use crate::participants::Participants;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PresetError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PresetError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PresetError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `participants` must hold exactly two distinct, non-empty names
    /// - `default_duration_minutes` must be positive
    pub fn validate(&self) -> Result<()> {
        self.participant_pair()?;

        if self.default_duration_minutes == 0 {
            return Err(PresetError::ConfigError(
                "default_duration_minutes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured participant pair.
    pub fn participant_pair(&self) -> Result<Participants> {
        Participants::from_slice(&self.participants)
    }
}
