//! `docsite themes`: list registered highlighting themes.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::Cli;
use super::common::load_registry;

pub fn list_themes(cli: &Cli) -> Result<()> {
    let registry = load_registry(cli)?;
    for name in registry.names() {
        let custom = cli.themes.iter().any(|(n, _)| n == name);
        if custom {
            println!("{name} {}", "(custom)".dimmed());
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
