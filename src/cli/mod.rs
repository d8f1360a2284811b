//! CLI argument parsing for presets.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Presets: expand event preset templates into randomized event text.
///
/// A preset is a title and description template. Placeholders like
/// `[A]`, `[WHO_PAYS]` or `[FOOD: Sushi, Pizza]` are resolved when the
/// event is submitted.
#[derive(Parser, Debug)]
#[command(name = "presets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (participants, default duration).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in presets in presentation order.
    List,

    /// Show the raw templates of a preset.
    Show(ShowArgs),

    /// Resolve a preset into a concrete event.
    ///
    /// Resolves the description, then the title (reading field values
    /// from the raw description), and prints both.
    Resolve(ResolveArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Preset label or plain name (e.g. "dinner").
    pub preset: String,
}

/// Placeholder matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum GrammarKind {
    /// Regular-expression matcher.
    #[default]
    Regex,
    /// Hand-rolled bracket scanner.
    Scanner,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Preset label or plain name (e.g. "dinner").
    pub preset: String,

    /// Local start time (YYYY-MM-DD HH:MM, YYYY-MM-DDTHH:MM, or RFC3339).
    #[arg(short, long)]
    pub start: String,

    /// Local end time. Defaults to start plus the configured duration.
    #[arg(short, long)]
    pub end: Option<String>,

    /// Title template to use instead of the preset's.
    #[arg(long)]
    pub title: Option<String>,

    /// Description template to use instead of the preset's.
    #[arg(long)]
    pub description: Option<String>,

    /// Id of an existing event; makes the request an edit.
    #[arg(long)]
    pub id: Option<String>,

    /// Seed for reproducible draws.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Placeholder matching strategy.
    #[arg(long, value_enum, default_value_t = GrammarKind::Regex)]
    pub grammar: GrammarKind,

    /// Print the JSON request body instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["presets", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["presets", "show", "dinner"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.preset, "dinner");
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_resolve_minimal() {
        let cli =
            Cli::try_parse_from(["presets", "resolve", "dinner", "--start", "2026-10-17 19:00"])
                .unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.preset, "dinner");
            assert_eq!(args.start, "2026-10-17 19:00");
            assert!(args.end.is_none());
            assert!(args.seed.is_none());
            assert_eq!(args.grammar, GrammarKind::Regex);
            assert!(!args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_resolve_full() {
        let cli = Cli::try_parse_from([
            "presets",
            "--config",
            "presets.yaml",
            "resolve",
            "🍿 Movie",
            "-s",
            "2026-10-17T20:00",
            "-e",
            "2026-10-17T22:30",
            "--description",
            "We'll watch: [MOVIES: Up, Heat]",
            "--id",
            "evt-9",
            "--seed",
            "7",
            "--grammar",
            "scanner",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("presets.yaml")));
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.preset, "🍿 Movie");
            assert_eq!(args.end.as_deref(), Some("2026-10-17T22:30"));
            assert_eq!(args.description.as_deref(), Some("We'll watch: [MOVIES: Up, Heat]"));
            assert_eq!(args.id.as_deref(), Some("evt-9"));
            assert_eq!(args.seed, Some(7));
            assert_eq!(args.grammar, GrammarKind::Scanner);
            assert!(args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn resolve_requires_start() {
        assert!(Cli::try_parse_from(["presets", "resolve", "dinner"]).is_err());
    }
}
