//! `docsite resolve`: print the resolved config as JSON.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Cli;
use super::common::load_resolved;
use crate::log;

pub fn resolve_site(cli: &Cli, pretty: bool, output: Option<&Path>) -> Result<()> {
    let resolved = load_resolved(cli)?;
    let json = if pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("resolve"; "wrote output to {}", path.display());
        }
        // stdout carries only the JSON
        None => println!("{json}"),
    }
    Ok(())
}
