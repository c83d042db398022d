//! Syntax-highlighting themes and the theme binder.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `registry` | Named theme objects, builtin and registered  |
//! | `builtin`  | Themes embedded in the binary                |

mod builtin;
mod registry;

pub use registry::ThemeRegistry;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{ConfigDiagnostics, ErrorKind, FieldPath};

/// A prism-style theme: base colors plus per-token styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeObject {
    pub plain: TokenStyle,
    #[serde(default)]
    pub styles: Vec<TokenRule>,
}

/// Style applied to the token types listed in `types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRule {
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    pub style: TokenStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// The light and dark themes a site renders code with.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundThemes {
    pub theme: Arc<ThemeObject>,
    pub dark_theme: Arc<ThemeObject>,
}

/// Look up the configured theme names.
///
/// A missing dark theme reuses the light one. Every unknown name is
/// reported, not just the first.
pub fn bind(
    registry: &ThemeRegistry,
    light: &str,
    dark: Option<&str>,
) -> Result<BoundThemes, ConfigDiagnostics> {
    let prism = FieldPath::root().key("themeConfig").key("prism");
    let mut diag = ConfigDiagnostics::new();
    let mut lookup = |name: &str, field: FieldPath| {
        let found = registry.lookup(name);
        if found.is_none() {
            diag.error_with_hint(
                ErrorKind::UnknownTheme,
                field,
                name,
                format!("available themes: {}", registry.names().join(", ")),
            );
        }
        found
    };

    let theme = lookup(light, prism.key("theme"));
    let dark_theme = match dark {
        Some(name) => lookup(name, prism.key("darkTheme")),
        None => theme.clone(),
    };

    match (theme, dark_theme) {
        (Some(theme), Some(dark_theme)) => Ok(BoundThemes { theme, dark_theme }),
        _ => Err(diag),
    }
}
