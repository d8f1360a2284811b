//! Placeholder grammar for preset templates.
//!
//! Templates contain bracketed directives that the resolver replaces:
//!
//! ```text
//! [A], [B]                  linked pair
//! [KEY]                     bare key
//! [KEY: item1, item2, ...]  keyed choice or keyed field
//! ```
//!
//! Keys are ASCII letters, digits and `_`, compared case-insensitively.
//! A keyed payload runs up to the first `]` and never crosses a line
//! break. Anything that does not fit
//! these shapes (unterminated brackets, empty keys, stray `:`) is not a
//! placeholder and stays in the text untouched.
//!
//! Matching lives behind [`PlaceholderGrammar`] so the resolver does not
//! care whether tokens come from a regex or a hand-rolled scanner.

mod pattern;
mod scanner;


pub use pattern::RegexGrammar;
pub use scanner::BracketScanner;

use std::ops::Range;

/// One placeholder token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte range of the whole token, brackets included.
    pub span: Range<usize>,
    /// Key as written in the template.
    pub key: &'t str,
    /// Raw text between `:` and `]`, or `None` for a bare token.
    pub payload: Option<&'t str>,
}

impl Placeholder<'_> {
    /// Case-insensitive key comparison.
    pub fn is_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }

    pub fn is_bare(&self) -> bool {
        self.payload.is_none()
    }
}

/// Recognizes placeholder tokens in a template.
pub trait PlaceholderGrammar: Send + Sync {
    /// All non-overlapping placeholders in `text`, in order of appearance.
    fn placeholders<'t>(&self, text: &'t str) -> Vec<Placeholder<'t>>;
}

/// Returns true for bytes allowed in a placeholder key.
pub(crate) fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns true when `key` is a well-formed placeholder key.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(is_key_byte)
}

/// Split a choice payload into its trimmed, non-empty items.
pub fn split_items(payload: &str) -> Vec<&str> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Rewrite `text` in one left-to-right pass.
///
/// Each placeholder is offered to `replace`; `Some` splices the returned
/// string in place of the token, `None` keeps the token as written.
/// Replacement text is not rescanned.
pub fn rewrite<F>(grammar: &dyn PlaceholderGrammar, text: &str, mut replace: F) -> String
where
    F: FnMut(&Placeholder<'_>) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for placeholder in grammar.placeholders(text) {
        if let Some(replacement) = replace(&placeholder) {
            result.push_str(&text[cursor..placeholder.span.start]);
            result.push_str(&replacement);
            cursor = placeholder.span.end;
        }
    }

    result.push_str(&text[cursor..]);
    result
}

/// Raw text of every placeholder still present in `text`.
pub fn unresolved(grammar: &dyn PlaceholderGrammar, text: &str) -> Vec<String> {
    grammar
        .placeholders(text)
        .into_iter()
        .map(|p| text[p.span].to_string())
        .collect()
}
