//! Hand-rolled placeholder scanner.
//!
//! Walks the template once, character by character. At every `[` it tries
//! to read a key followed by either `]` (bare token) or `:` and a payload up
//! to the next `]` on the same line (keyed token). A failed attempt resumes right after the
//! `[`, so `[[FOOD]` still finds `[FOOD]`.

use super::{Placeholder, PlaceholderGrammar, is_key_byte};

/// Bracket scanner with the same acceptance rules as [`super::RegexGrammar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketScanner;

impl PlaceholderGrammar for BracketScanner {
    fn placeholders<'t>(&self, text: &'t str) -> Vec<Placeholder<'t>> {
        let mut found = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if ch != '[' {
                continue;
            }

            if let Some(placeholder) = scan_token(text, pos) {
                // Skip everything the token covered
                while let Some(&(next, _)) = chars.peek() {
                    if next >= placeholder.span.end {
                        break;
                    }
                    chars.next();
                }
                found.push(placeholder);
            }
        }

        found
    }
}

/// Try to read a placeholder starting at the `[` at byte `start`.
fn scan_token(text: &str, start: usize) -> Option<Placeholder<'_>> {
    let key_start = start + 1;
    let key_len = text[key_start..]
        .bytes()
        .take_while(|b| is_key_byte(*b))
        .count();
    if key_len == 0 {
        return None;
    }

    let key_end = key_start + key_len;
    let key = &text[key_start..key_end];

    match text[key_end..].chars().next()? {
        ']' => Some(Placeholder {
            span: start..key_end + 1,
            key,
            payload: None,
        }),
        ':' => {
            let payload_start = key_end + 1;
            let close = payload_start + text[payload_start..].find([']', '\n'])?;
            if text[close..].starts_with('\n') {
                return None;
            }
            Some(Placeholder {
                span: start..close + 1,
                key,
                payload: Some(&text[payload_start..close]),
            })
        }
        _ => None,
    }
}
