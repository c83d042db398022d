//! Builtin defaults, the bottom layer every user config is merged over.

use serde_json::json;

use super::layer::ConfigLayer;

/// Defaults for every optional key that has one.
///
/// Required keys (`title`, `url`, `baseUrl`) have no default, so this is a
/// partial layer.
pub fn builtin_defaults() -> ConfigLayer {
    ConfigLayer::from_checked(json!({
        "tagline": "",
        "onBrokenLinks": "throw",
        "onBrokenMarkdownLinks": "warn",
        "noIndex": false,
        "presets": [],
        "themeConfig": {
            "docs": {
                "sidebar": { "hideable": false, "autoCollapseCategories": false }
            },
            "colorMode": {
                "defaultMode": "light",
                "disableSwitch": false,
                "respectPrefersColorScheme": false
            },
            "navbar": { "hideOnScroll": false, "items": [] },
            "footer": { "style": "light", "links": [] },
            "prism": { "additionalLanguages": [], "theme": "palenight" }
        }
    }))
}
