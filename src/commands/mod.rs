//! Command implementations for presets.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod list;
mod resolve;
mod show;

use crate::cli::{Cli, Command};
use event_presets::catalog::PresetCatalog;
use event_presets::config::Config;
use event_presets::error::{PresetError, Result};
use event_presets::preset::Preset;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::List => list::cmd_list(PresetCatalog::builtin()),
        Command::Show(args) => show::cmd_show(PresetCatalog::builtin(), args),
        Command::Resolve(args) => resolve::cmd_resolve(PresetCatalog::builtin(), &config, args),
    }
}

/// Load the config file when one is given, defaults otherwise.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Look up a preset or explain which ones exist.
fn find_preset<'a>(catalog: &'a PresetCatalog, query: &str) -> Result<&'a Preset> {
    catalog.find(query).ok_or_else(|| {
        let labels: Vec<&str> = catalog.iter().map(Preset::label).collect();
        PresetError::UserError(format!(
            "preset '{}' not found.\n\n\
             Available presets: {}\n\n\
             Use `presets list` to see all presets.",
            query,
            labels.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_preset_by_name() {
        let preset = find_preset(PresetCatalog::builtin(), "shopping").unwrap();
        assert_eq!(preset.label(), "🛒 Shopping");
    }

    #[test]
    fn unknown_preset_lists_alternatives() {
        let err = find_preset(PresetCatalog::builtin(), "brunch").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("preset 'brunch' not found"));
        assert!(message.contains("🍴 Dinner"));
        assert_eq!(err.exit_code(), event_presets::exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, PresetError::ConfigError(_)));
    }

    #[test]
    fn no_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.default_duration_minutes, 60);
    }
}
