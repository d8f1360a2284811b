//! Title resolution.

use super::TemplateResolver;
use crate::grammar::rewrite;
use crate::preset::{KeyRole, Preset};
use chrono::{DateTime, TimeZone};

impl TemplateResolver {
    /// Resolve a title template.
    ///
    /// Bare field keys (`[PERSON]`) take the value of the first non-empty
    /// `[PERSON: value]` in `description`, unbolded. The description may be
    /// raw or resolved; a resolved one no longer carries field tokens, so
    /// callers normally pass the raw template. Afterwards the preset's title
    /// rule, if any, runs with the start time read in `start`'s time zone.
    pub fn resolve_title<Tz: TimeZone>(
        &self,
        preset: &Preset,
        title: &str,
        start: &DateTime<Tz>,
        description: &str,
    ) -> String {
        let resolved = self.substitute_title_fields(preset, title, description);

        match preset.title_rule() {
            Some(rule) => rule(&resolved, start.naive_local().time()),
            None => resolved,
        }
    }

    fn substitute_title_fields(&self, preset: &Preset, title: &str, description: &str) -> String {
        if preset.field_keys().is_empty() {
            return title.to_string();
        }

        let sources = self.grammar().placeholders(description);

        rewrite(self.grammar(), title, |p| {
            if !p.is_bare() || preset.role_of(p.key) != Some(KeyRole::Field) {
                return None;
            }
            sources
                .iter()
                .filter(|source| source.is_key(p.key))
                .filter_map(|source| source.payload.map(str::trim))
                .find(|value| !value.is_empty())
                .map(str::to_string)
        })
    }
}
