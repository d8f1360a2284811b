//! Implementation of the `presets resolve` command.
//!
//! Mirrors the submission path of the event form: the description is
//! resolved first, then the title (which reads field values from the raw
//! description), and the result is printed as text or as the JSON request
//! body for the event store.

use super::find_preset;
use crate::cli::{GrammarKind, ResolveArgs};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use event_presets::catalog::PresetCatalog;
use event_presets::config::Config;
use event_presets::error::{PresetError, Result};
use event_presets::event::ResolvedEvent;
use event_presets::grammar::{BracketScanner, unresolved};
use event_presets::resolver::TemplateResolver;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Accepted local time formats, besides RFC3339.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Execute the `presets resolve` command.
pub fn cmd_resolve(catalog: &PresetCatalog, config: &Config, args: ResolveArgs) -> Result<()> {
    let (event, warnings) = build_event(catalog, config, &args)?;

    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    if args.json {
        let body = event
            .to_json()
            .map_err(|e| PresetError::UserError(format!("failed to serialize event: {}", e)))?;
        println!("{}", body);
    } else {
        println!("Title:  {}", event.title);
        println!("Start:  {}", event.start.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
        println!("End:    {}", event.end.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
        println!();
        println!("{}", event.description);
    }

    Ok(())
}

/// Resolve the preset into an event, collecting warnings for placeholders
/// that survived resolution.
fn build_event(
    catalog: &PresetCatalog,
    config: &Config,
    args: &ResolveArgs,
) -> Result<(ResolvedEvent, Vec<String>)> {
    let preset = find_preset(catalog, &args.preset)?;

    let title_template = args.title.as_deref().unwrap_or(preset.title());
    if title_template.trim().is_empty() {
        return Err(PresetError::UserError(
            "title must not be empty.\n\nPass --title or pick a preset with a title.".to_string(),
        ));
    }
    let description_template = args.description.as_deref().unwrap_or(preset.description());

    let start = parse_local_time(&args.start)?;
    let end = match &args.end {
        Some(end) => parse_local_time(end)?,
        None => start + Duration::minutes(i64::from(config.default_duration_minutes)),
    };
    if end < start {
        return Err(PresetError::UserError(format!(
            "end time '{}' is before start time '{}'",
            end.format("%Y-%m-%d %H:%M"),
            start.format("%Y-%m-%d %H:%M")
        )));
    }

    let resolver = TemplateResolver::new(config.participant_pair()?);
    let resolver = match args.grammar {
        GrammarKind::Regex => resolver,
        GrammarKind::Scanner => resolver.with_grammar(BracketScanner),
    };

    let description = match args.seed {
        Some(seed) => resolver.resolve_with(
            preset,
            description_template,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => resolver.resolve(preset, description_template),
    };
    let title = resolver.resolve_title(preset, title_template, &start, description_template);

    let mut warnings = Vec::new();
    for (field, text) in [("title", &title), ("description", &description)] {
        let leftovers = unresolved(resolver.grammar(), text);
        if !leftovers.is_empty() {
            warnings.push(format!(
                "unresolved placeholders in {}: {}",
                field,
                leftovers.join(", ")
            ));
        }
    }

    let event = ResolvedEvent::new(
        args.id.clone(),
        title,
        description,
        start.with_timezone(&Utc),
        end.with_timezone(&Utc),
    );

    Ok((event, warnings))
}

/// Parse a user-supplied time as device-local time.
fn parse_local_time(input: &str) -> Result<DateTime<Local>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Local.from_local_datetime(&naive).earliest().ok_or_else(|| {
                PresetError::UserError(format!("'{}' does not exist in the local time zone", input))
            });
        }
    }

    Err(PresetError::UserError(format!(
        "invalid time '{}'. Use YYYY-MM-DD HH:MM or RFC3339.",
        input
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn args(preset: &str, start: &str) -> ResolveArgs {
        ResolveArgs {
            preset: preset.to_string(),
            start: start.to_string(),
            end: None,
            title: None,
            description: None,
            id: None,
            seed: Some(1),
            grammar: GrammarKind::Regex,
            json: false,
        }
    }

    #[test]
    fn parses_local_formats() {
        let a = parse_local_time("2026-10-17 19:05").unwrap();
        let b = parse_local_time("2026-10-17T19:05").unwrap();
        assert_eq!(a, b);
        assert_eq!((a.hour(), a.minute()), (19, 5));
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_local_time("2026-10-17T19:00:00Z").unwrap();
        assert_eq!(dt.with_timezone(&Utc).hour(), 19);
    }

    #[test]
    fn rejects_garbage_time() {
        let err = parse_local_time("tomorrow at noon").unwrap_err();
        assert!(err.to_string().contains("invalid time"));
    }

    #[test]
    fn dinner_title_follows_local_start() {
        let config = Config::default();
        let (event, warnings) =
            build_event(PresetCatalog::builtin(), &config, &args("dinner", "2026-10-17 09:00"))
                .unwrap();

        assert_eq!(event.title, "🍴 Breakfast Date");
        assert!(event.description.contains("What to eat: <b>"));
        assert!(event.description.contains("is treating tonight! 💸"));
        assert!(warnings.is_empty());
        assert_eq!(event.end - event.start, Duration::minutes(60));
    }

    #[test]
    fn seed_makes_output_reproducible() {
        let config = Config::default();
        let a = build_event(PresetCatalog::builtin(), &config, &args("movie", "2026-10-17 20:00"))
            .unwrap();
        let b = build_event(PresetCatalog::builtin(), &config, &args("movie", "2026-10-17 20:00"))
            .unwrap();
        assert_eq!(a.0.description, b.0.description);
    }

    #[test]
    fn birthday_title_uses_description_field() {
        let config = Config::default();
        let mut a = args("birthday", "2026-10-17 18:00");
        a.description = Some("Happy birthday [PERSON: Alex]!".to_string());
        a.grammar = GrammarKind::Scanner;

        let (event, warnings) = build_event(PresetCatalog::builtin(), &config, &a).unwrap();
        assert_eq!(event.title, "🎂 Alex's Birthday");
        assert_eq!(event.description, "Happy birthday <b>Alex</b>!");
        assert!(warnings.is_empty());
    }

    #[test]
    fn leftover_placeholders_become_warnings() {
        let config = Config::default();
        let mut a = args("gym", "2026-10-17 07:00");
        a.description = Some("Bring [XYZ]".to_string());

        let (event, warnings) = build_event(PresetCatalog::builtin(), &config, &a).unwrap();
        assert_eq!(event.description, "Bring [XYZ]");
        assert_eq!(warnings, vec!["unresolved placeholders in description: [XYZ]"]);
    }

    #[test]
    fn custom_participants_from_config() {
        let config = Config::from_yaml("participants: [Ana, Bo]").unwrap();
        let (event, _) =
            build_event(PresetCatalog::builtin(), &config, &args("coffee", "2026-10-17 10:00"))
                .unwrap();
        assert!(event.description.contains("<b>Ana</b>"));
        assert!(event.description.contains("<b>Bo</b>"));
    }

    #[test]
    fn id_makes_an_edit() {
        let config = Config::default();
        let mut a = args("gym", "2026-10-17 07:00");
        a.id = Some("evt-3".to_string());
        let (event, _) = build_event(PresetCatalog::builtin(), &config, &a).unwrap();
        assert_eq!(event.action, event_presets::event::EventAction::Edit);
    }

    #[test]
    fn rejects_end_before_start() {
        let config = Config::default();
        let mut a = args("gym", "2026-10-17 07:00");
        a.end = Some("2026-10-17 06:00".to_string());
        let err = build_event(PresetCatalog::builtin(), &config, &a).unwrap_err();
        assert!(err.to_string().contains("before start"));
    }

    #[test]
    fn rejects_empty_title() {
        let config = Config::default();
        let mut a = args("gym", "2026-10-17 07:00");
        a.title = Some("   ".to_string());
        assert!(build_event(PresetCatalog::builtin(), &config, &a).is_err());
    }
}
