//! `themeConfig` section.
//!
//! Groups the presentation settings. Navbar, footer and prism live in their
//! own modules.

use serde::{Deserialize, Serialize};

use super::footer::{FOOTER_SCHEMA, FooterConfig};
use super::navbar::{NAVBAR_SCHEMA, NavbarConfig};
use super::prism::{PRISM_SCHEMA, PrismConfig};
use crate::config::schema::{Field, Schema};

const SIDEBAR_SCHEMA: Schema = Schema::Object(&[
    Field::optional("hideable", Schema::Bool),
    Field::optional("autoCollapseCategories", Schema::Bool),
]);

const COLOR_MODE_SCHEMA: Schema = Schema::Object(&[
    Field::optional("defaultMode", Schema::Enum(&["light", "dark"])),
    Field::optional("disableSwitch", Schema::Bool),
    Field::optional("respectPrefersColorScheme", Schema::Bool),
]);

pub const THEME_CONFIG_SCHEMA: Schema = Schema::Object(&[
    Field::optional(
        "docs",
        Schema::Object(&[Field::optional("sidebar", SIDEBAR_SCHEMA)]),
    ),
    Field::optional("colorMode", COLOR_MODE_SCHEMA),
    Field::optional("navbar", NAVBAR_SCHEMA),
    Field::optional("footer", FOOTER_SCHEMA),
    Field::optional("prism", PRISM_SCHEMA),
]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub docs: DocsThemeConfig,
    pub color_mode: ColorModeConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub prism: PrismConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsThemeConfig {
    pub sidebar: SidebarConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    pub hideable: bool,
    pub auto_collapse_categories: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorModeConfig {
    pub default_mode: ColorMode,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}
