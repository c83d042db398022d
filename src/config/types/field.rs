//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use serde::{Serialize, Serializer};
use std::fmt;

/// Dotted path to a config field, with list indices.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::root().key("themeConfig").key("navbar").key("items").index(2);
/// assert_eq!(path.as_str(), "themeConfig.navbar.items[2]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    /// The path of the config object itself.
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Child path for an object key.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Child path for a list element.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.is_root() { "<root>" } else { &self.0 };
        write!(f, "{}", format_args!("`{path}`").bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
