//! Meal naming from the time of day.

use chrono::{NaiveTime, Timelike};
use regex::{NoExpand, RegexBuilder};
use std::fmt;

/// A meal name derived from an event's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

/// Half-open `[start, end)` bands in minutes after midnight. Anything outside is dinner.
const BANDS: [(u32, u32, Meal); 3] = [
    (5 * 60, 10 * 60 + 30, Meal::Breakfast),
    (10 * 60 + 30, 15 * 60, Meal::Lunch),
    (15 * 60, 18 * 60 + 30, Meal::Snack),
];

impl Meal {
    /// The meal for a given local time of day.
    pub fn at(time: NaiveTime) -> Self {
        let minutes = time.hour() * 60 + time.minute();

        BANDS
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&minutes))
            .map(|(_, _, meal)| *meal)
            .unwrap_or(Meal::Dinner)
    }

    pub fn name(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Snack => "Snack",
            Meal::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace the first whole-word, case-insensitive match of `anchor`.
///
/// Text around the word (emoji, punctuation) is left as is. Returns the
/// input unchanged when the anchor does not occur.
pub fn replace_word(text: &str, anchor: &str, replacement: &str) -> String {
    let pattern = format!(r"\b{}\b", regex::escape(anchor));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.replace(text, NoExpand(replacement)).into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Title rule for meal presets: swap "Dinner" for the meal at `start`.
pub fn meal_title(title: &str, start: NaiveTime) -> String {
    replace_word(title, Meal::Dinner.name(), Meal::at(start).name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn meal_bands() {
        assert_eq!(Meal::at(hm(9, 0)), Meal::Breakfast);
        assert_eq!(Meal::at(hm(12, 30)), Meal::Lunch);
        assert_eq!(Meal::at(hm(17, 0)), Meal::Snack);
        assert_eq!(Meal::at(hm(20, 0)), Meal::Dinner);
    }

    #[test]
    fn meal_band_edges() {
        assert_eq!(Meal::at(hm(4, 59)), Meal::Dinner);
        assert_eq!(Meal::at(hm(5, 0)), Meal::Breakfast);
        assert_eq!(Meal::at(hm(10, 29)), Meal::Breakfast);
        assert_eq!(Meal::at(hm(10, 30)), Meal::Lunch);
        assert_eq!(Meal::at(hm(15, 0)), Meal::Snack);
        assert_eq!(Meal::at(hm(18, 29)), Meal::Snack);
        assert_eq!(Meal::at(hm(18, 30)), Meal::Dinner);
        assert_eq!(Meal::at(hm(0, 0)), Meal::Dinner);
        assert_eq!(Meal::at(hm(23, 59)), Meal::Dinner);
    }

    #[test]
    fn seconds_do_not_matter() {
        let t = NaiveTime::from_hms_opt(10, 29, 59).unwrap();
        assert_eq!(Meal::at(t), Meal::Breakfast);
    }

    #[test]
    fn replace_word_keeps_surroundings() {
        assert_eq!(replace_word("🍴 Dinner Date", "Dinner", "Lunch"), "🍴 Lunch Date");
        assert_eq!(replace_word("🍴 dinner!", "Dinner", "Snack"), "🍴 Snack!");
    }

    #[test]
    fn replace_word_only_first_whole_word() {
        assert_eq!(
            replace_word("Dinner and Dinnerware, Dinner", "Dinner", "Lunch"),
            "Lunch and Dinnerware, Dinner"
        );
        assert_eq!(replace_word("Dinnerware", "Dinner", "Lunch"), "Dinnerware");
    }

    #[test]
    fn replacement_is_literal() {
        assert_eq!(replace_word("Dinner", "Dinner", "$1 meal"), "$1 meal");
    }

    #[test]
    fn meal_title_rule() {
        assert_eq!(meal_title("🍴 Dinner Date", hm(9, 0)), "🍴 Breakfast Date");
        assert_eq!(meal_title("🍴 Dinner Date", hm(21, 0)), "🍴 Dinner Date");
        assert_eq!(meal_title("Date night", hm(12, 0)), "Date night");
    }
}
