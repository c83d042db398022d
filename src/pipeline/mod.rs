//! The configuration pipeline.
//!
//! Each state is its own type, so no stage can be skipped:
//!
//! ```text
//! RawConfig ──validate──► ValidatedConfig ──merge──► SiteConfig
//!                                                        │
//!          ResolvedConfig ◄──resolve── ThemedConfig ◄──bind_themes
//!
//! any stage ──► Rejected { stage, diagnostics }
//! ```
//!
//! `ThemedConfig::resolve` borrows, so it can be re-run whenever the page
//! inventory changes.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{
    ConfigDiagnostics, ConfigLayer, RawConfig, SITE_SCHEMA, SiteConfig, validate, validate_layer,
};
use crate::debug;
use crate::page::PageInventory;
use crate::resolve::{ResolvedConfig, resolve};
use crate::theme::{BoundThemes, ThemeRegistry, bind};

// =============================================================================
// Rejection
// =============================================================================

/// Pipeline stage, recorded on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Validate,
    Merge,
    Bind,
    Resolve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validate => "validate",
            Self::Merge => "merge",
            Self::Bind => "bind",
            Self::Resolve => "resolve",
        })
    }
}

/// Terminal failure: every problem found by the failing stage.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("configuration rejected at the {stage} stage")]
pub struct Rejected {
    pub stage: Stage,
    #[serde(rename = "errors")]
    pub diagnostics: ConfigDiagnostics,
}

impl Rejected {
    fn at(stage: Stage) -> impl FnOnce(ConfigDiagnostics) -> Self {
        move |diagnostics| Self { stage, diagnostics }
    }
}

// =============================================================================
// Stages
// =============================================================================

/// A config that passed the schema check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    layer: ConfigLayer,
    root: PathBuf,
}

/// A merged config with its highlighting themes bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemedConfig {
    pub site: SiteConfig,
    pub themes: BoundThemes,
}

impl RawConfig {
    /// Check against the recognized options. Collects every problem.
    pub fn validate(self) -> Result<ValidatedConfig, Rejected> {
        let layer = validate(self.value(), &SITE_SCHEMA).map_err(Rejected::at(Stage::Validate))?;
        debug!("check"; "schema ok");
        Ok(ValidatedConfig {
            layer,
            root: self.root().to_path_buf(),
        })
    }
}

impl RawConfig {
    /// Check a partial layer, such as a defaults file shared by several
    /// sites. Required fields may be absent.
    pub fn validate_partial(self) -> Result<ConfigLayer, Rejected> {
        validate_layer(self.value(), &SITE_SCHEMA).map_err(Rejected::at(Stage::Validate))
    }
}

impl ValidatedConfig {
    /// Overlay onto `defaults` and type the result.
    pub fn merge(self, defaults: &ConfigLayer) -> Result<SiteConfig, Rejected> {
        let merged = self.layer.merge_over(defaults);
        SiteConfig::from_layer(merged, &self.root).map_err(Rejected::at(Stage::Merge))
    }
}

impl SiteConfig {
    /// Bind `themeConfig.prism.theme` / `darkTheme` from `registry`.
    pub fn bind_themes(self, registry: &ThemeRegistry) -> Result<ThemedConfig, Rejected> {
        let prism = &self.theme_config.prism;
        let themes = bind(registry, &prism.theme, prism.dark_theme.as_deref())
            .map_err(Rejected::at(Stage::Bind))?;
        Ok(ThemedConfig { site: self, themes })
    }
}

impl ThemedConfig {
    /// Resolve navigation targets against a finished inventory.
    pub fn resolve(&self, inventory: &PageInventory) -> Result<ResolvedConfig, Rejected> {
        resolve(&self.site, &self.themes, inventory).map_err(Rejected::at(Stage::Resolve))
    }
}

/// Run every stage in order.
pub fn run(
    raw: RawConfig,
    defaults: &ConfigLayer,
    registry: &ThemeRegistry,
    inventory: &PageInventory,
) -> Result<ResolvedConfig, Rejected> {
    raw.validate()?
        .merge(defaults)?
        .bind_themes(registry)?
        .resolve(inventory)
}
