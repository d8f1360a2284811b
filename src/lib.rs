//! Event presets: a template-resolution engine for calendar events.
//!
//! A [`Preset`](preset::Preset) holds a title and a description template.
//! Placeholders in those templates are expanded by a
//! [`TemplateResolver`](resolver::TemplateResolver) into randomized,
//! human-readable text:
//!
//! ```text
//! What to eat: [FOOD: Sushi, Pizza, Burgers]   ->  🍣 What to eat: <b>Sushi</b>
//!                                                  Better luck next time for Pizza and Burgers.
//! [A] is paying today!                         ->  <b>Carolina</b> is paying today!
//! 🎂 [PERSON]'s Birthday                       ->  🎂 Alex's Birthday
//! ```
//!
//! Resolution is synchronous and never fails; the only nondeterminism is
//! the injected [`RandomSource`](random::RandomSource).

pub mod annotate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod grammar;
pub mod meal;
pub mod participants;
pub mod preset;
pub mod random;
pub mod resolver;

pub use catalog::PresetCatalog;
pub use error::{PresetError, Result};
pub use participants::Participants;
pub use preset::Preset;
pub use resolver::TemplateResolver;
