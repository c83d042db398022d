//! `docsite check`: run the pipeline and print a summary.

use anyhow::Result;
use chrono::Datelike;
use owo_colors::OwoColorize;

use super::Cli;
use super::common::load_resolved;
use crate::log;
use crate::resolve::Resolution;
use crate::utils::plural::plural_count;

pub fn check_site(cli: &Cli) -> Result<()> {
    let resolved = load_resolved(cli)?;
    let site = &resolved.site;

    let home = site.absolute_url("/").unwrap_or_else(|| site.url.clone());
    log!("check"; "{} {}", site.title.bold(), home.dimmed());

    for preset in &site.presets {
        let options = &preset.options;
        let docs = options.docs.as_enabled().map(|d| d.route_base_path.as_str());
        let blog = options.blog.as_enabled().map(|b| b.route_base_path.as_str());
        log!(
            "check";
            "preset {}: docs {}, blog {}",
            preset.kind.name(),
            docs.unwrap_or("off"),
            blog.unwrap_or("off")
        );
    }

    let prism = &site.theme_config.prism;
    log!(
        "check";
        "themes {} / {}",
        prism.theme,
        prism.dark_theme.as_deref().unwrap_or(&prism.theme)
    );

    if let Some(copyright) = site
        .theme_config
        .footer
        .copyright_text(chrono::Local::now().year())
    {
        log!("check"; "footer {}", copyright.dimmed());
    }

    let placeholders = resolved
        .references
        .iter()
        .filter(|r| matches!(r.resolution, Resolution::Placeholder))
        .count();
    if placeholders > 0 {
        log!(
            "check";
            "{} replaced by `#`",
            plural_count(placeholders, "broken reference")
        );
    }
    log!(
        "ok";
        "{} resolved",
        plural_count(resolved.references.len(), "reference")
    );
    Ok(())
}
