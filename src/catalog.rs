//! The ordered collection of presets offered to the user.
//!
//! Catalog order is presentation order. Picking a preset only copies its
//! raw templates; resolution happens later, on submission.

use crate::annotate::annotate_food;
use crate::error::{PresetError, Result};
use crate::meal::meal_title;
use crate::preset::Preset;
use std::collections::HashSet;
use std::sync::LazyLock;

static BUILTIN: LazyLock<PresetCatalog> = LazyLock::new(|| PresetCatalog {
    presets: builtin_presets(),
});

/// An ordered, uniquely labeled list of presets.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Build a catalog, validating every preset and rejecting duplicate labels.
    pub fn new(presets: Vec<Preset>) -> Result<Self> {
        let mut labels = HashSet::new();
        for preset in &presets {
            preset.validate()?;
            if !labels.insert(preset.label()) {
                return Err(PresetError::invalid_preset(
                    preset.label(),
                    "label is already used by another preset",
                ));
            }
        }
        Ok(Self { presets })
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static PresetCatalog {
        &BUILTIN
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Preset> {
        self.presets.iter()
    }

    /// Find a preset by label.
    ///
    /// An exact label match wins. Otherwise the query is compared
    /// case-insensitively against each label with its leading emoji and
    /// punctuation stripped, so `dinner` finds `🍴 Dinner`.
    pub fn find(&self, query: &str) -> Option<&Preset> {
        let query = query.trim();
        if let Some(preset) = self.presets.iter().find(|p| p.label() == query) {
            return Some(preset);
        }

        let wanted = label_text(query).to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.presets
            .iter()
            .find(|p| label_text(p.label()).to_lowercase() == wanted)
    }
}

impl<'a> IntoIterator for &'a PresetCatalog {
    type Item = &'a Preset;
    type IntoIter = std::slice::Iter<'a, Preset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}

/// Label text without leading emoji, punctuation or whitespace.
fn label_text(label: &str) -> &str {
    label.trim_start_matches(|c: char| !c.is_alphanumeric()).trim()
}

fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::builder(
            "🍴 Dinner",
            "🍴 Dinner Date",
            "What to eat: [FOOD: Sushi, Pizza, Burgers]\n\nWho pays: [WHO_PAYS]",
        )
        .choice_keys(["FOOD"])
        .person_keys(["WHO_PAYS"])
        .person_suffix("WHO_PAYS", " is treating tonight! 💸")
        .annotator(annotate_food)
        .title_rule(meal_title)
        .build_unchecked(),
        Preset::builder(
            "🍿 Movie",
            "🍿 Movie Night",
            "We'll watch: [MOVIES: Movie 1, Movie 2, ...]",
        )
        .choice_keys(["MOVIES"])
        .build_unchecked(),
        Preset::builder(
            "🛒 Shopping",
            "🛒 Shopping",
            "\nWho will be pushing the cart: [RNG_SHOPPING]",
        )
        .person_keys(["RNG_SHOPPING"])
        .person_suffix("RNG_SHOPPING", " has to push the cart today!")
        .build_unchecked(),
        Preset::builder("🏋️ Gym", "🏋️ Gym Session", "").build_unchecked(),
        Preset::builder(
            "🎂 Birthday",
            "🎂 [PERSON]'s Birthday",
            "Happy birthday [PERSON: Name]! 🎉",
        )
        .field_keys(["PERSON"])
        .build_unchecked(),
        Preset::builder(
            "☕ Coffee",
            "☕ Coffee Break",
            "[A] is paying today!\n[B] picks the place.",
        )
        .build_unchecked(),
    ]
}
