//! `presets` section.
//!
//! # Example
//!
//! ```toml
//! presets = [
//!   ["classic", { docs = { sidebarPath = "sidebars.js", breadcrumbs = false }, blog = false }],
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use super::Toggle;
use crate::config::schema::{Field, Schema, Walker};
use crate::config::{ErrorKind, FieldPath};

// ============================================================================
// Schema
// ============================================================================

const DOCS_FIELDS: &[Field] = &[
    Field::optional("path", Schema::String),
    Field::optional("routeBasePath", Schema::String),
    Field::optional("sidebarPath", Schema::String),
    Field::optional("breadcrumbs", Schema::Bool),
    Field::optional("editUrl", Schema::String),
];

const BLOG_FIELDS: &[Field] = &[
    Field::optional("path", Schema::String),
    Field::optional("routeBasePath", Schema::String),
    Field::optional("showReadingTime", Schema::Bool),
    Field::optional("postsPerPage", Schema::PositiveInt),
];

const OPTIONS_SCHEMA: Schema = Schema::Object(&[
    Field::optional("docs", Schema::Toggle(DOCS_FIELDS)),
    Field::optional("blog", Schema::Toggle(BLOG_FIELDS)),
    Field::optional(
        "theme",
        Schema::Object(&[Field::optional("customCss", Schema::String)]),
    ),
]);

/// One entry of `presets`: a preset name, or `[name, options]`.
pub const PRESET_SCHEMA: Schema = Schema::Custom(check_preset);

fn check_preset(walker: &mut Walker<'_>, value: &Value, path: &FieldPath) {
    match value {
        Value::String(name) => check_name(walker, name, path),
        Value::Array(pair) => match pair.as_slice() {
            [name, options] => {
                let name_path = path.index(0);
                if walker.expect(name.is_string(), name, &name_path, "string")
                    && let Some(name) = name.as_str()
                {
                    check_name(walker, name, &name_path);
                }
                walker.check(options, &OPTIONS_SCHEMA, &path.index(1));
            }
            _ => walker.diag().error_with_hint(
                ErrorKind::InvalidValue,
                path.clone(),
                format!("preset entry has {} elements, expected 2", pair.len()),
                "use \"classic\" or [\"classic\", { ... }]",
            ),
        },
        other => walker.type_mismatch(other, path, "preset name or [name, options]"),
    }
}

fn check_name(walker: &mut Walker<'_>, name: &str, path: &FieldPath) {
    if PresetKind::from_name(name).is_none() {
        walker.diag().error_with_hint(
            ErrorKind::InvalidValue,
            path.clone(),
            format!("unknown preset `{name}`"),
            format!("available presets: `{}`", PresetKind::Classic.name()),
        );
    }
}

// ============================================================================
// Types
// ============================================================================

/// Known preset bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetKind {
    /// Docs + blog + theme.
    #[serde(rename = "classic", alias = "@docusaurus/preset-classic")]
    Classic,
}

impl PresetKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "@docusaurus/preset-classic" => Some(Self::Classic),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
        }
    }
}

/// A configured preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPreset", into = "RawPreset")]
pub struct PresetConfig {
    pub kind: PresetKind,
    pub options: ClassicOptions,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPreset {
    Name(PresetKind),
    WithOptions(PresetKind, ClassicOptions),
}

impl From<RawPreset> for PresetConfig {
    fn from(raw: RawPreset) -> Self {
        match raw {
            RawPreset::Name(kind) => Self {
                kind,
                options: ClassicOptions::default(),
            },
            RawPreset::WithOptions(kind, options) => Self { kind, options },
        }
    }
}

impl From<PresetConfig> for RawPreset {
    fn from(preset: PresetConfig) -> Self {
        RawPreset::WithOptions(preset.kind, preset.options)
    }
}

/// Options of the classic preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassicOptions {
    pub docs: Toggle<DocsOptions>,
    pub blog: Toggle<BlogOptions>,
    pub theme: ThemeOptions,
}

/// Docs plugin options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsOptions {
    /// Docs source directory, relative to the site root.
    pub path: PathBuf,
    pub route_base_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<PathBuf>,
    pub breadcrumbs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "docs".into(),
            sidebar_path: None,
            breadcrumbs: true,
            edit_url: None,
        }
    }
}

/// Blog plugin options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogOptions {
    pub path: PathBuf,
    pub route_base_path: String,
    pub show_reading_time: bool,
    pub posts_per_page: u32,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            path: "blog".into(),
            route_base_path: "blog".into(),
            show_reading_time: true,
            posts_per_page: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<PathBuf>,
}
