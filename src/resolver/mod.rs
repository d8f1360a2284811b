//! Template resolution.
//!
//! [`TemplateResolver`] expands a preset's description and title templates
//! into final text. Description resolution runs these passes, in order:
//!
//! 1. linked pair: `[A]`/`[B]` become the two participants, one draw per call
//! 2. person keys: `[KEY]` becomes one participant, one draw per key per call,
//!    followed by the key's suffix if the preset declares one
//! 3. choice keys: `[KEY: a, b, c]` becomes the picked item plus a
//!    consolation line naming the rest
//! 4. field keys: `[KEY: value]` becomes the value, bolded
//! 5. the preset's annotator, if any
//!
//! Nothing here fails. Placeholders with unknown keys, empty choice lists,
//! or broken brackets are left in the output as written.

mod title;


use crate::grammar::{PlaceholderGrammar, RegexGrammar, rewrite, split_items};
use crate::participants::Participants;
use crate::preset::{KeyRole, Preset};
use crate::random::RandomSource;
use std::collections::HashMap;

/// Prefix of the line listing the choice items that were not picked.
pub const CONSOLATION_PREFIX: &str = "Better luck next time for ";

/// Expands preset templates.
pub struct TemplateResolver {
    participants: Participants,
    grammar: Box<dyn PlaceholderGrammar>,
}

impl std::fmt::Debug for TemplateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateResolver")
            .field("participants", &self.participants)
            .finish_non_exhaustive()
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new(Participants::default())
    }
}

impl TemplateResolver {
    /// Resolver over `participants` using the regex grammar.
    pub fn new(participants: Participants) -> Self {
        Self {
            participants,
            grammar: Box::new(RegexGrammar),
        }
    }

    /// Swap the placeholder grammar.
    pub fn with_grammar<G: PlaceholderGrammar + 'static>(mut self, grammar: G) -> Self {
        self.grammar = Box::new(grammar);
        self
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn grammar(&self) -> &dyn PlaceholderGrammar {
        self.grammar.as_ref()
    }

    /// Resolve a description with the thread-local generator.
    ///
    /// Every call draws afresh; results are not memoized.
    pub fn resolve(&self, preset: &Preset, description: &str) -> String {
        self.resolve_with(preset, description, &mut rand::thread_rng())
    }

    /// Resolve a description, drawing from `rng`.
    pub fn resolve_with<R>(&self, preset: &Preset, description: &str, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let text = self.substitute_linked_pair(description, rng);
        let text = self.substitute_person_keys(preset, &text, rng);
        let text = self.substitute_choices(preset, &text, rng);
        let text = self.substitute_fields(preset, &text);

        match preset.annotator() {
            Some(annotate) => annotate(&text),
            None => text,
        }
    }

    fn substitute_linked_pair<R>(&self, text: &str, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let mut pair: Option<(&str, &str)> = None;

        rewrite(self.grammar(), text, |p| {
            if !p.is_bare() {
                return None;
            }
            let is_a = if p.is_key("A") {
                true
            } else if p.is_key("B") {
                false
            } else {
                return None;
            };

            let (a, b) = *pair.get_or_insert_with(|| self.participants.pair(rng));
            Some(bold(if is_a { a } else { b }))
        })
    }

    fn substitute_person_keys<R>(&self, preset: &Preset, text: &str, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let mut drawn: HashMap<String, &str> = HashMap::new();

        rewrite(self.grammar(), text, |p| {
            if !p.is_bare() || preset.role_of(p.key) != Some(KeyRole::Person) {
                return None;
            }
            let person = *drawn
                .entry(p.key.to_ascii_uppercase())
                .or_insert_with(|| self.participants.pick(rng));
            let mut resolved = bold(person);
            if let Some(suffix) = preset.person_suffix(p.key) {
                resolved.push_str(suffix);
            }
            Some(resolved)
        })
    }

    fn substitute_choices<R>(&self, preset: &Preset, text: &str, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        rewrite(self.grammar(), text, |p| {
            let payload = p.payload?;
            if preset.role_of(p.key) != Some(KeyRole::Choice) {
                return None;
            }
            resolve_choice(payload, rng)
        })
    }

    /// A field with an empty value stays as written, so a form left blank shows
    /// the token instead of an empty bold tag.
    fn substitute_fields(&self, preset: &Preset, text: &str) -> String {
        rewrite(self.grammar(), text, |p| {
            let payload = p.payload?;
            if preset.role_of(p.key) != Some(KeyRole::Field) {
                return None;
            }
            let value = payload.trim();
            (!value.is_empty()).then(|| bold(value))
        })
    }
}

/// Pick one item from a choice payload and describe the ones left out.
///
/// Returns `None` when the payload holds no items.
pub fn resolve_choice<R>(payload: &str, rng: &mut R) -> Option<String>
where
    R: RandomSource + ?Sized,
{
    let mut items = split_items(payload);
    if items.is_empty() {
        return None;
    }

    let selected = items.remove(rng.index(items.len()));
    let mut result = bold(selected);

    if !items.is_empty() {
        result.push('\n');
        result.push_str(CONSOLATION_PREFIX);
        result.push_str(&join_with_and(&items));
        result.push('.');
    }

    Some(result)
}

/// `["x"]` -> `x`, `["x", "y", "z"]` -> `x, y and z`.
pub fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}
