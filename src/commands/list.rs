//! Implementation of the `presets list` command.

use event_presets::catalog::PresetCatalog;
use event_presets::error::Result;
use event_presets::preset::Preset;

/// Print every preset in catalog order with its key roles.
pub fn cmd_list(catalog: &PresetCatalog) -> Result<()> {
    for line in list_lines(catalog) {
        println!("{}", line);
    }
    Ok(())
}

fn list_lines(catalog: &PresetCatalog) -> Vec<String> {
    catalog.iter().map(describe).collect()
}

fn describe(preset: &Preset) -> String {
    let roles: Vec<String> = preset
        .keys_with_roles()
        .map(|(key, role)| format!("{}:{}", role, key))
        .collect();

    if roles.is_empty() {
        preset.label().to_string()
    } else {
        format!("{}  ({})", preset.label(), roles.join(", "))
    }
}
