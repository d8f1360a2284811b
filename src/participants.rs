//! The two-person pool used by every "which person" rule.

use crate::error::{PresetError, Result};
use crate::random::RandomSource;

/// Default participant names.
pub const DEFAULT_PARTICIPANTS: [&str; 2] = ["Ricardo", "Carolina"];

/// A fixed, ordered pair of participant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    names: [String; 2],
}

impl Participants {
    /// Build a participant pair; names are trimmed and must be non-empty and distinct.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into().trim().to_string();
        let second = second.into().trim().to_string();

        if first.is_empty() || second.is_empty() {
            return Err(PresetError::ConfigError(
                "participant names must be non-empty".to_string(),
            ));
        }
        if first == second {
            return Err(PresetError::ConfigError(format!(
                "participant names must be distinct (both are '{}')",
                first
            )));
        }

        Ok(Self {
            names: [first, second],
        })
    }

    /// Build from a slice that must hold exactly two names.
    pub fn from_slice(names: &[String]) -> Result<Self> {
        match names {
            [first, second] => Self::new(first.as_str(), second.as_str()),
            _ => Err(PresetError::ConfigError(format!(
                "exactly two participants are required, found {}",
                names.len()
            ))),
        }
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// One participant, uniformly at random.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        &self.names[usize::from(rng.coin())]
    }

    /// Both participants in random order, from a single draw.
    pub fn pair<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        let first = usize::from(rng.coin());
        (&self.names[first], &self.names[1 - first])
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self {
            names: DEFAULT_PARTICIPANTS.map(String::from),
        }
    }
}
