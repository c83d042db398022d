//! `docsite links`: check links between markdown docs.

use anyhow::{Result, bail};
use std::path::PathBuf;

use super::Cli;
use super::common::{load_inventory, load_site};
use super::report::print_link_report;
use crate::config::ConfigError;
use crate::log;
use crate::markdown::{MarkdownReport, check_docs, check_files, collect_markdown_files};
use crate::utils::path::normalize_path;
use crate::utils::plural::plural_count;

pub fn check_links(cli: &Cli, paths: &[PathBuf]) -> Result<()> {
    let site = load_site(cli)?;
    let inventory = load_inventory(cli, &site)?;

    let result = if paths.is_empty() {
        check_docs(&site, &inventory)
    } else {
        check_files(&site, &expand_paths(paths), &inventory)
    };

    match result {
        Ok(MarkdownReport { broken, .. }) if !broken.is_empty() => {
            log!("links"; "{} let through by policy", plural_count(broken.len(), "broken link"));
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(ConfigError::Diagnostics(diagnostics)) => {
            print_link_report(&diagnostics, cli.format)?;
            bail!("found {}", plural_count(diagnostics.len(), "broken markdown link"));
        }
        Err(e) => Err(e.into()),
    }
}

/// Files as given, directories expanded to their markdown sources.
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|path| normalize_path(path))
        .flat_map(|path| {
            if path.is_dir() {
                collect_markdown_files(&path)
            } else {
                vec![path]
            }
        })
        .collect()
}
