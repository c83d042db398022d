//! Themes embedded in the binary.

use std::sync::{Arc, LazyLock};

use super::ThemeObject;

const SOURCES: &[(&str, &str)] = &[
    ("github", include_str!("builtin/github.json")),
    ("dracula", include_str!("builtin/dracula.json")),
    ("palenight", include_str!("builtin/palenight.json")),
    ("vsLight", include_str!("builtin/vsLight.json")),
    ("vsDark", include_str!("builtin/vsDark.json")),
    ("oneLight", include_str!("builtin/oneLight.json")),
    ("oneDark", include_str!("builtin/oneDark.json")),
];

/// Parsed builtin themes, shared by every registry.
pub static BUILTIN_THEMES: LazyLock<Vec<(&'static str, Arc<ThemeObject>)>> = LazyLock::new(|| {
    SOURCES
        .iter()
        .filter_map(|(name, source)| {
            serde_json::from_str(source)
                .ok()
                .map(|theme| (*name, Arc::new(theme)))
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_parse() {
        for (name, source) in SOURCES {
            let parsed: Result<ThemeObject, _> = serde_json::from_str(source);
            assert!(parsed.is_ok(), "builtin theme `{name}` does not parse");
        }
        assert_eq!(BUILTIN_THEMES.len(), SOURCES.len());
    }
}
