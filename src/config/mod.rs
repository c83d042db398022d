//! Site configuration for `docsite.toml` (or `.json` / `.yaml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Typed sections with their schemas
//! │   ├── preset     # presets: classic docs/blog/theme options
//! │   ├── theme      # themeConfig
//! │   ├── navbar     # themeConfig.navbar
//! │   ├── footer     # themeConfig.footer
//! │   ├── prism      # themeConfig.prism
//! │   └── link       # to / docId / href targets
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── raw            # File formats, RawConfig
//! ├── schema         # Schema trees and the validating walker
//! ├── layer          # Checked layers and the deep merge
//! ├── defaults       # Builtin defaults layer
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Top-level keys
//!
//! | Key                     | Purpose                                   |
//! |-------------------------|-------------------------------------------|
//! | `title`, `tagline`      | Site metadata                             |
//! | `url`, `baseUrl`        | Origin and path prefix of every route     |
//! | `trailingSlash`         | Route normalization                       |
//! | `onBrokenLinks`         | Policy for navbar/footer targets          |
//! | `onBrokenMarkdownLinks` | Policy for links inside markdown sources  |
//! | `presets`               | Docs, blog and theme plugin options       |
//! | `themeConfig`           | Navbar, footer, prism, color mode         |

mod defaults;
#[cfg(test)]
pub(crate) mod fixtures;
mod layer;
mod raw;
pub mod schema;
pub mod section;
pub mod types;
mod util;

pub use defaults::builtin_defaults;
pub use layer::ConfigLayer;
pub use raw::{ConfigFormat, RawConfig};
pub use schema::{validate, validate_layer};
pub use section::{LinkTarget, NavItem, PresetConfig, ThemeConfig, Toggle};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};
pub use util::find_config_file;

use schema::{Field, Schema};
use section::{PRESET_SCHEMA, THEME_CONFIG_SCHEMA};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::resolve::LinkFailurePolicy;
use crate::utils::path::resolve_path;

// ============================================================================
// schema
// ============================================================================

/// Recognized top-level options.
pub const SITE_SCHEMA: Schema = Schema::Object(&[
    Field::required("title", Schema::String),
    Field::optional("tagline", Schema::String),
    Field::required("url", Schema::SiteUrl),
    Field::required("baseUrl", Schema::BaseUrl),
    Field::optional("favicon", Schema::String),
    Field::optional("organizationName", Schema::String),
    Field::optional("projectName", Schema::String),
    Field::optional("trailingSlash", Schema::Bool),
    Field::optional("deploymentBranch", Schema::String),
    Field::optional("onBrokenLinks", Schema::Enum(LinkFailurePolicy::NAMES)),
    Field::optional("onBrokenMarkdownLinks", Schema::Enum(LinkFailurePolicy::NAMES)),
    Field::optional("noIndex", Schema::Bool),
    Field::optional("presets", Schema::List(&PRESET_SCHEMA)),
    Field::optional("themeConfig", THEME_CONFIG_SCHEMA),
]);

// ============================================================================
// root configuration
// ============================================================================

/// The merged site configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Directory of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// Site origin, e.g. `https://parpy-lib.github.io`.
    pub url: String,
    /// Path prefix of every route. Always ends with `/`.
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_branch: Option<String>,
    #[serde(default)]
    pub on_broken_links: LinkFailurePolicy,
    #[serde(default)]
    pub on_broken_markdown_links: LinkFailurePolicy,
    #[serde(default)]
    pub no_index: bool,
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Type a merged layer and finalize paths against `root`.
    ///
    /// The layer is schema-checked, so a failure here means the typed model
    /// and the schema disagree; it is reported at the root path.
    pub fn from_layer(layer: ConfigLayer, root: &Path) -> Result<Self, ConfigDiagnostics> {
        let mut config: Self = serde_json::from_value(layer.into_value()).map_err(|e| {
            ConfigDiagnostics::from(ConfigDiagnostic::new(
                ErrorKind::TypeMismatch,
                FieldPath::root(),
                e.to_string(),
            ))
        })?;
        config.root = root.to_path_buf();
        config.finalize();
        Ok(config)
    }

    /// Normalize values that have one canonical form.
    fn finalize(&mut self) {
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }

        let root = self.root.clone();
        for preset in &mut self.presets {
            let options = &mut preset.options;
            if let Some(docs) = options.docs.as_enabled_mut() {
                docs.path = resolve_path(&docs.path, &root);
                docs.sidebar_path = docs.sidebar_path.as_deref().map(|p| resolve_path(p, &root));
            }
            if let Some(blog) = options.blog.as_enabled_mut() {
                blog.path = resolve_path(&blog.path, &root);
            }
            options.theme.custom_css = options
                .theme
                .custom_css
                .as_deref()
                .map(|p| resolve_path(p, &root));
        }
    }

    /// Check that configured files exist.
    pub fn check_files(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let mut require = |path: &Path, field: FieldPath| {
            if !path.is_file() {
                diag.error_with_hint(
                    ErrorKind::MissingFile,
                    field,
                    format!("`{}` does not exist", path.display()),
                    "paths are relative to the config file's directory",
                );
            }
        };

        for (i, preset) in self.presets.iter().enumerate() {
            let options_path = FieldPath::root().key("presets").index(i).index(1);
            if let Some(sidebar) = preset
                .options
                .docs
                .as_enabled()
                .and_then(|docs| docs.sidebar_path.as_deref())
            {
                require(sidebar, options_path.key("docs").key("sidebarPath"));
            }
            if let Some(css) = preset.options.theme.custom_css.as_deref() {
                require(css, options_path.key("theme").key("customCss"));
            }
        }
        diag
    }

    /// Absolute URL of a site route, e.g. `/docs/intro` under `url`.
    pub fn absolute_url(&self, route: &str) -> Option<String> {
        url::Url::parse(&self.url)
            .and_then(|base| base.join(route))
            .ok()
            .map(String::from)
    }

    /// Docs plugin options of the first preset that enables docs.
    pub fn docs(&self) -> Option<&section::DocsOptions> {
        self.presets
            .iter()
            .find_map(|preset| preset.options.docs.as_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::PARPY_TOML;
    use serde_json::{Value, json};

    fn merged(value: &Value, root: &Path) -> SiteConfig {
        let layer = validate(value, &SITE_SCHEMA).unwrap();
        SiteConfig::from_layer(layer.merge_over(&builtin_defaults()), root).unwrap()
    }

    #[test]
    fn test_parpy_config_validates_and_merges() {
        let value = ConfigFormat::Toml.parse(PARPY_TOML).unwrap();
        let config = merged(&value, Path::new("/site"));

        assert_eq!(config.title, "ParPy");
        assert_eq!(config.trailing_slash, Some(false));
        assert_eq!(config.on_broken_markdown_links, LinkFailurePolicy::Throw);
        assert_eq!(config.theme_config.navbar.items.len(), 3);
        assert_eq!(config.theme_config.footer.links.len(), 2);
        assert_eq!(config.theme_config.prism.dark_theme.as_deref(), Some("dracula"));
        assert!(config.theme_config.docs.sidebar.hideable);

        let docs = config.docs().unwrap();
        assert_eq!(docs.sidebar_path.as_deref(), Some(Path::new("/site/sidebars.js")));
        assert_eq!(docs.path, PathBuf::from("/site/docs"));
        assert!(config.presets[0].options.blog.as_enabled().is_none());
        assert_eq!(
            config.presets[0].options.theme.custom_css.as_deref(),
            Some(Path::new("/site/src/css/custom.css"))
        );
    }

    #[test]
    fn test_unknown_top_level_field() {
        let diag = validate(
            &json!({ "title": "x", "url": "https://a.dev", "baseUrl": "/", "titel": "y" }),
            &SITE_SCHEMA,
        )
        .unwrap_err();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, ErrorKind::UnknownField);
        assert_eq!(diag.errors()[0].field.as_str(), "titel");
    }

    #[test]
    fn test_missing_required_fields_collected() {
        let diag = validate(&json!({ "trailingSlash": "no" }), &SITE_SCHEMA).unwrap_err();
        let fields: Vec<_> = diag.errors().iter().map(|e| (e.kind, e.field.as_str())).collect();
        assert_eq!(
            fields,
            [
                (ErrorKind::TypeMismatch, "trailingSlash"),
                (ErrorKind::MissingField, "title"),
                (ErrorKind::MissingField, "url"),
                (ErrorKind::MissingField, "baseUrl"),
            ]
        );
    }

    #[test]
    fn test_invalid_policy() {
        let diag = validate(
            &json!({ "title": "x", "url": "https://a.dev", "baseUrl": "/", "onBrokenLinks": "explode" }),
            &SITE_SCHEMA,
        )
        .unwrap_err();
        assert_eq!(diag.errors()[0].kind, ErrorKind::InvalidValue);
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("`warn`"));
    }

    #[test]
    fn test_defaults_fill_gaps() {
        let config = merged(
            &json!({ "title": "x", "url": "https://a.dev", "baseUrl": "/docs" }),
            Path::new("/site"),
        );
        assert_eq!(config.base_url, "/docs/");
        assert_eq!(config.tagline, "");
        assert_eq!(config.on_broken_links, LinkFailurePolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, LinkFailurePolicy::Warn);
        assert_eq!(config.theme_config, ThemeConfig::default());
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_serialized_config_revalidates() {
        let value = ConfigFormat::Toml.parse(PARPY_TOML).unwrap();
        let config = merged(&value, Path::new("/site"));
        let round = serde_json::to_value(&config).unwrap();
        assert!(validate(&round, &SITE_SCHEMA).is_ok());
        assert_eq!(merged(&round, Path::new("/site")), config);
    }

    #[test]
    fn test_check_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sidebars.js"), "module.exports = {};").unwrap();
        let value = ConfigFormat::Toml.parse(PARPY_TOML).unwrap();
        let config = merged(&value, dir.path());

        let diag = config.check_files();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, ErrorKind::MissingFile);
        assert_eq!(diag.errors()[0].field.as_str(), "presets[0][1].theme.customCss");
    }

    #[test]
    fn test_absolute_url() {
        let value = json!({ "title": "x", "url": "https://parpy-lib.github.io", "baseUrl": "/" });
        let config = merged(&value, Path::new("/site"));
        assert_eq!(
            config.absolute_url("/docs/intro").as_deref(),
            Some("https://parpy-lib.github.io/docs/intro")
        );
    }
}
