//! Theme registry: name → theme object.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::ThemeObject;
use super::builtin::BUILTIN_THEMES;
use crate::config::ConfigError;

/// Named themes available to the binder.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Arc<ThemeObject>>,
}

impl ThemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the builtin themes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, theme) in BUILTIN_THEMES.iter() {
            registry.themes.insert((*name).to_string(), Arc::clone(theme));
        }
        registry
    }

    /// Add or replace a theme.
    pub fn register(&mut self, name: impl Into<String>, theme: ThemeObject) {
        self.themes.insert(name.into(), Arc::new(theme));
    }

    /// Register a theme from a prism-style JSON file.
    pub fn load_file(&mut self, name: impl Into<String>, path: &Path) -> Result<(), ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let theme: ThemeObject = serde_json::from_str(&content)?;
        self.register(name, theme);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<ThemeObject>> {
        self.themes.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TokenStyle;

    #[test]
    fn test_builtins_present() {
        let registry = ThemeRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            ["dracula", "github", "oneDark", "oneLight", "palenight", "vsDark", "vsLight"]
        );
        assert!(registry.lookup("GitHub").is_none());
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = ThemeRegistry::with_builtins();
        let theme = ThemeObject {
            plain: TokenStyle {
                color: Some("#fff".into()),
                ..TokenStyle::default()
            },
            styles: vec![],
        };
        registry.register("github", theme.clone());
        assert_eq!(*registry.lookup("github").unwrap(), theme);
        assert_eq!(registry.names().len(), 7);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solarized.json");
        std::fs::write(
            &path,
            r##"{ "plain": { "color": "#657b83", "backgroundColor": "#fdf6e3" },
                 "styles": [{ "types": ["comment"], "style": { "color": "#93a1a1", "fontStyle": "italic" } }] }"##,
        )
        .unwrap();

        let mut registry = ThemeRegistry::new();
        registry.load_file("solarized", &path).unwrap();
        let theme = registry.lookup("solarized").unwrap();
        assert_eq!(theme.styles[0].style.font_style.as_deref(), Some("italic"));

        std::fs::write(&path, "{ \"styles\": [] }").unwrap();
        assert!(matches!(
            registry.load_file("broken", &path),
            Err(ConfigError::Json(_))
        ));
    }
}
