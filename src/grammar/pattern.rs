//! Regex-backed placeholder grammar.

use super::{Placeholder, PlaceholderGrammar};
use regex::Regex;
use std::sync::LazyLock;

/// `[KEY]` or `[KEY: payload]`, payload ending at the first `]` on the same line.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Za-z0-9_]+)(?::([^\]\n]*))?\]").expect("Invalid placeholder regex")
});

/// Default grammar, driven by a single compiled regex.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexGrammar;

impl PlaceholderGrammar for RegexGrammar {
    fn placeholders<'t>(&self, text: &'t str) -> Vec<Placeholder<'t>> {
        PLACEHOLDER_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let key = caps.get(1)?.as_str();
                Some(Placeholder {
                    span: whole.range(),
                    key,
                    payload: caps.get(2).map(|m| m.as_str()),
                })
            })
            .collect()
    }
}
