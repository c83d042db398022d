//! Configuration section definitions.
//!
//! Each module holds a typed section together with its `const` schema:
//!
//! | Module    | Config key               | Purpose                           |
//! |-----------|--------------------------|-----------------------------------|
//! | `preset`  | `presets`                | Classic preset: docs, blog, theme |
//! | `theme`   | `themeConfig`            | Sidebar, color mode               |
//! | `navbar`  | `themeConfig.navbar`     | Title and nav items               |
//! | `footer`  | `themeConfig.footer`     | Style, link columns, copyright    |
//! | `prism`   | `themeConfig.prism`      | Highlighting languages and themes |
//! | `link`    | (shared)                 | `to` / `docId` / `href` targets   |

mod footer;
mod link;
mod navbar;
mod preset;
mod prism;
mod theme;

pub use footer::{FOOTER_SCHEMA, FooterColumn, FooterConfig, FooterItem, FooterStyle};
pub use link::LinkTarget;
pub use navbar::{NAVBAR_SCHEMA, NavItem, NavbarConfig, NavbarStyle, Position};
pub use preset::{
    BlogOptions, ClassicOptions, DocsOptions, PRESET_SCHEMA, PresetConfig, PresetKind,
    ThemeOptions,
};
pub use prism::{PRISM_SCHEMA, PrismConfig};
pub use theme::{
    ColorMode, ColorModeConfig, DocsThemeConfig, SidebarConfig, THEME_CONFIG_SCHEMA, ThemeConfig,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A section that is either switched off or enabled with options.
///
/// Raw forms: `false`, `true` (enabled with default options) or an options
/// object. Serializes back to `false` or the options object.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle<T> {
    Disabled,
    Enabled(T),
}

impl<T> Toggle<T> {
    pub fn as_enabled(&self) -> Option<&T> {
        match self {
            Self::Enabled(options) => Some(options),
            Self::Disabled => None,
        }
    }

    pub fn as_enabled_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Enabled(options) => Some(options),
            Self::Disabled => None,
        }
    }
}

impl<T: Default> Default for Toggle<T> {
    fn default() -> Self {
        Self::Enabled(T::default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToggle<T> {
    Flag(bool),
    Options(T),
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Toggle<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawToggle::<T>::deserialize(deserializer)? {
            RawToggle::Flag(false) => Self::Disabled,
            RawToggle::Flag(true) => Self::Enabled(T::default()),
            RawToggle::Options(options) => Self::Enabled(options),
        })
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(options) => options.serialize(serializer),
        }
    }
}
