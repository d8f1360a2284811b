//! Config struct definition and default implementation.

use crate::participants::DEFAULT_PARTICIPANTS;
use serde::{Deserialize, Serialize};

/// Configuration for preset resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The two names used by every "which person" rule.
    #[serde(default = "default_participants")]
    pub participants: Vec<String>,

    /// Event length used when no end time is given.
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            participants: default_participants(),
            default_duration_minutes: default_duration_minutes(),
        }
    }
}

pub(crate) fn default_participants() -> Vec<String> {
    DEFAULT_PARTICIPANTS.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn default_duration_minutes() -> u32 {
    60
}
