//! Implementation of the `presets show` command.
//!
//! Displays the raw templates of a preset, exactly as they would be copied
//! into the event form.

use super::find_preset;
use crate::cli::ShowArgs;
use event_presets::catalog::PresetCatalog;
use event_presets::error::Result;

/// Execute the `presets show` command.
pub fn cmd_show(catalog: &PresetCatalog, args: ShowArgs) -> Result<()> {
    let preset = find_preset(catalog, &args.preset)?;

    println!("================================================================================");
    println!("{}", preset.label());
    println!("================================================================================");
    println!();
    println!("Title:       {}", preset.title());

    let keys: Vec<String> = preset
        .keys_with_roles()
        .map(|(key, role)| format!("{} ({})", key, role))
        .collect();
    if !keys.is_empty() {
        println!("Keys:        {}", keys.join(", "));
    }

    println!();
    println!("Description:");
    if preset.description().is_empty() {
        println!("  (empty)");
    } else {
        for line in preset.description().lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}
