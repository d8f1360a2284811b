//! Content annotation for resolved descriptions.
//!
//! Annotators run after placeholder substitution and may decorate the
//! resolved text. They must leave already-annotated text alone.

use regex::Regex;
use std::sync::LazyLock;

/// Label the food annotator decorates.
pub const FOOD_LABEL: &str = "What to eat:";

/// Food keywords (lower case) and their emoji, checked in order.
pub const FOOD_EMOJI: &[(&str, &str)] = &[
    ("sushi", "🍣"),
    ("pizza", "🍕"),
    ("burger", "🍔"),
    ("taco", "🌮"),
    ("ramen", "🍜"),
    ("pasta", "🍝"),
    ("salad", "🥗"),
    ("curry", "🍛"),
    ("steak", "🥩"),
    ("chicken", "🍗"),
];

static FOOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"What to eat: <b>([^<]*)</b>").expect("Invalid food label regex")
});

/// Emoji for a food name, matched case-insensitively by keyword.
pub fn food_emoji(food: &str) -> Option<&'static str> {
    let food = food.to_lowercase();
    FOOD_EMOJI
        .iter()
        .find(|(keyword, _)| food.contains(keyword))
        .map(|(_, emoji)| *emoji)
}

/// Prefix each `What to eat:` label with the emoji for the chosen food.
///
/// Labels already preceded by a food emoji are skipped, so applying this
/// twice yields the same text.
pub fn annotate_food(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut cursor = 0;

    for caps in FOOD_REGEX.captures_iter(text) {
        let (Some(label), Some(food)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(emoji) = food_emoji(food.as_str()) else {
            continue;
        };

        let before = &text[..label.start()];
        let already = FOOD_EMOJI
            .iter()
            .any(|(_, e)| before.ends_with(&format!("{e} ")));
        if already {
            continue;
        }

        result.push_str(&text[cursor..label.start()]);
        result.push_str(emoji);
        result.push(' ');
        cursor = label.start();
    }

    result.push_str(&text[cursor..]);
    result
}
