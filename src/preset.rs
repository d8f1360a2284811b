//! Preset definitions.
//!
//! A [`Preset`] is an immutable template pair (title + description) plus the
//! roles of the keys its placeholders use:
//!
//! - **choice** keys: `[KEY: a, b, c]`, one item picked at random
//! - **person** keys: `[KEY]`, one participant picked at random
//! - **field** keys: `[KEY: value]`, value copied verbatim
//!
//! Per-preset behavior (decorating the description, deriving the title from
//! the start time) is stored as plain function pointers rather than through
//! separate preset types.

use crate::error::{PresetError, Result};
use crate::grammar::is_valid_key;
use chrono::NaiveTime;
use std::collections::HashSet;

/// Post-processing applied to a fully resolved description.
pub type Annotator = fn(&str) -> String;

/// Title derivation applied after field substitution.
pub type TitleRule = fn(&str, NaiveTime) -> String;

/// Keys reserved for the linked pair.
pub const LINKED_PAIR_KEYS: [&str; 2] = ["A", "B"];

/// How a placeholder key is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Choice,
    Person,
    Field,
}

impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::Choice => write!(f, "choice"),
            KeyRole::Person => write!(f, "person"),
            KeyRole::Field => write!(f, "field"),
        }
    }
}

/// One event template.
#[derive(Debug, Clone)]
pub struct Preset {
    label: String,
    title: String,
    description: String,
    choice_keys: Vec<String>,
    person_keys: Vec<String>,
    field_keys: Vec<String>,
    person_suffixes: Vec<(String, String)>,
    annotator: Option<Annotator>,
    title_rule: Option<TitleRule>,
}

impl Preset {
    /// Start building a preset.
    pub fn builder(
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> PresetBuilder {
        PresetBuilder {
            preset: Preset {
                label: label.into(),
                title: title.into(),
                description: description.into(),
                choice_keys: Vec::new(),
                person_keys: Vec::new(),
                field_keys: Vec::new(),
                person_suffixes: Vec::new(),
                annotator: None,
                title_rule: None,
            },
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choice_keys(&self) -> &[String] {
        &self.choice_keys
    }

    pub fn person_keys(&self) -> &[String] {
        &self.person_keys
    }

    pub fn field_keys(&self) -> &[String] {
        &self.field_keys
    }

    /// Text appended after a resolved person key, e.g. `" is treating tonight!"`.
    pub fn person_suffix(&self, key: &str) -> Option<&str> {
        self.person_suffixes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, suffix)| suffix.as_str())
    }

    pub fn annotator(&self) -> Option<Annotator> {
        self.annotator
    }

    pub fn title_rule(&self) -> Option<TitleRule> {
        self.title_rule
    }

    /// Role of `key`, compared case-insensitively.
    pub fn role_of(&self, key: &str) -> Option<KeyRole> {
        self.keys_with_roles()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, role)| role)
    }

    /// Every declared key with its role, choice keys first.
    pub fn keys_with_roles(&self) -> impl Iterator<Item = (&str, KeyRole)> {
        let choice = self.choice_keys.iter().map(|k| (k.as_str(), KeyRole::Choice));
        let person = self.person_keys.iter().map(|k| (k.as_str(), KeyRole::Person));
        let field = self.field_keys.iter().map(|k| (k.as_str(), KeyRole::Field));
        choice.chain(person).chain(field)
    }

    /// Check the construction invariants.
    ///
    /// - the label is not blank
    /// - every key is well formed and not `A`/`B`
    /// - no key appears twice, within or across roles (case-insensitive)
    /// - suffixes only attach to declared person keys
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(PresetError::invalid_preset(
                &self.label,
                "label must not be empty",
            ));
        }

        let mut seen: HashSet<String> = HashSet::new();
        for (key, role) in self.keys_with_roles() {
            if !is_valid_key(key) {
                return Err(PresetError::invalid_preset(
                    &self.label,
                    format!(
                        "{} key '{}' must use only ASCII letters, digits and '_'",
                        role, key
                    ),
                ));
            }

            if LINKED_PAIR_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key)) {
                return Err(PresetError::invalid_preset(
                    &self.label,
                    format!("key '{}' is reserved for the linked pair", key),
                ));
            }

            if !seen.insert(key.to_ascii_uppercase()) {
                return Err(PresetError::invalid_preset(
                    &self.label,
                    format!("key '{}' is declared more than once", key),
                ));
            }
        }

        for (key, _) in &self.person_suffixes {
            if self.role_of(key) != Some(KeyRole::Person) {
                return Err(PresetError::invalid_preset(
                    &self.label,
                    format!("suffix given for '{}', which is not a person key", key),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for [`Preset`].
#[derive(Debug, Clone)]
pub struct PresetBuilder {
    preset: Preset,
}

impl PresetBuilder {
    pub fn choice_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset.choice_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn person_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset.person_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn field_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset.field_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Append `suffix` after every resolution of person key `key`.
    pub fn person_suffix(mut self, key: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.preset.person_suffixes.push((key.into(), suffix.into()));
        self
    }

    pub fn annotator(mut self, annotator: Annotator) -> Self {
        self.preset.annotator = Some(annotator);
        self
    }

    pub fn title_rule(mut self, rule: TitleRule) -> Self {
        self.preset.title_rule = Some(rule);
        self
    }

    /// Validate and return the preset.
    pub fn build(self) -> Result<Preset> {
        self.preset.validate()?;
        Ok(self.preset)
    }

    /// Return the preset without validation. Used for the built-in catalog,
    /// whose definitions are checked by tests.
    pub(crate) fn build_unchecked(self) -> Preset {
        self.preset
    }
}
