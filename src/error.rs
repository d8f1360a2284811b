//! Error types for preset construction and the presets CLI.
//!
//! Template resolution itself never fails: unknown or malformed placeholders
//! stay in the output as literal text. Errors only surface when a preset is
//! defined, when configuration is loaded, or when CLI input is bad.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for preset operations.
#[derive(Error, Debug)]
pub enum PresetError {
    /// User provided invalid arguments (unknown preset, bad time, ...).
    #[error("{0}")]
    UserError(String),

    /// A preset definition violates a construction invariant.
    #[error("invalid preset '{label}': {reason}")]
    InvalidPreset { label: String, reason: String },

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    ConfigError(String),
}

impl PresetError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PresetError::UserError(_) => exit_codes::USER_ERROR,
            PresetError::InvalidPreset { .. } => exit_codes::INVALID_PRESET,
            PresetError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }

    pub(crate) fn invalid_preset(label: &str, reason: impl Into<String>) -> Self {
        PresetError::InvalidPreset {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PresetError::UserError("unknown preset".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_preset_has_correct_exit_code() {
        let err = PresetError::invalid_preset("🍴 Dinner", "key FOOD listed twice");
        assert_eq!(err.exit_code(), exit_codes::INVALID_PRESET);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = PresetError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PresetError::invalid_preset("Gym", "label must not be empty");
        assert_eq!(err.to_string(), "invalid preset 'Gym': label must not be empty");

        let err = PresetError::ConfigError("participants must be distinct".to_string());
        assert_eq!(err.to_string(), "config error: participants must be distinct");
    }
}
