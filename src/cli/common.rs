//! Loading shared by every command: config file, theme registry and page
//! inventory.

use anyhow::{Context, Result, anyhow, bail};

use super::report::{failure_message, print_rejection};
use super::{Cli, ReportFormat};
use crate::config::{ConfigLayer, RawConfig, SiteConfig, builtin_defaults, find_config_file};
use crate::debug;
use crate::page::PageInventory;
use crate::pipeline::{Rejected, ThemedConfig};
use crate::resolve::ResolvedConfig;
use crate::theme::ThemeRegistry;
use crate::utils::plural::plural_count;

/// Print the rejection report and turn it into the error `main` returns.
pub fn reject(rejected: Rejected, format: ReportFormat) -> anyhow::Error {
    match print_rejection(&rejected, format) {
        Ok(()) => anyhow!(failure_message(&rejected)),
        Err(e) => e,
    }
}

/// Locate and parse the config file named by `-C`.
pub fn load_raw(cli: &Cli) -> Result<RawConfig> {
    let Some(path) = find_config_file(&cli.config) else {
        bail!(
            "config file `{}` not found in this directory or any parent",
            cli.config.display()
        );
    };
    debug!("config"; "loading {}", path.display());
    RawConfig::load(&path).with_context(|| format!("failed to load `{}`", path.display()))
}

/// Builtin themes plus every `--theme NAME=PATH`.
pub fn load_registry(cli: &Cli) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::with_builtins();
    for (name, path) in &cli.themes {
        registry
            .load_file(name.as_str(), path)
            .with_context(|| format!("failed to load theme `{name}`"))?;
        debug!("theme"; "registered `{}` from {}", name, path.display());
    }
    debug!("theme"; "{} available", plural_count(registry.names().len(), "theme"));
    Ok(registry)
}

/// `--inventory` when given, otherwise a scan of the docs directory.
pub fn load_inventory(cli: &Cli, site: &SiteConfig) -> Result<PageInventory> {
    let inventory = match &cli.inventory {
        Some(path) => PageInventory::from_path(path)
            .with_context(|| format!("failed to load inventory `{}`", path.display()))?,
        None => PageInventory::scan_docs(site),
    };
    debug!(
        "inventory";
        "{}, {}",
        plural_count(inventory.route_count(), "route"),
        plural_count(inventory.doc_count(), "doc")
    );
    Ok(inventory)
}

/// Builtin defaults, with the `--defaults` layer on top when given.
pub fn load_defaults(cli: &Cli) -> Result<ConfigLayer> {
    let builtin = builtin_defaults();
    let Some(path) = &cli.defaults else {
        return Ok(builtin);
    };
    let shared = RawConfig::load(path)
        .with_context(|| format!("failed to load defaults `{}`", path.display()))?
        .validate_partial()
        .map_err(|rejected| reject(rejected, cli.format))?;
    debug!("config"; "defaults layer {}", path.display());
    Ok(shared.merge_over(&builtin))
}

/// Validate and merge over the defaults.
pub fn load_site(cli: &Cli) -> Result<SiteConfig> {
    let defaults = load_defaults(cli)?;
    load_raw(cli)?
        .validate()
        .and_then(|validated| validated.merge(&defaults))
        .map_err(|rejected| reject(rejected, cli.format))
}

/// Validate, merge and bind themes.
pub fn load_themed(cli: &Cli) -> Result<ThemedConfig> {
    let registry = load_registry(cli)?;
    load_site(cli)?
        .bind_themes(&registry)
        .map_err(|rejected| reject(rejected, cli.format))
}

/// Every stage, with the inventory loaded after merge.
pub fn load_resolved(cli: &Cli) -> Result<ResolvedConfig> {
    let themed = load_themed(cli)?;
    let inventory = load_inventory(cli, &themed.site)?;
    themed
        .resolve(&inventory)
        .map_err(|rejected| reject(rejected, cli.format))
}
