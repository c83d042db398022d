//! `themeConfig.navbar` section.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.navbar]
//! title = "ParPy"
//!
//! [[themeConfig.navbar.items]]
//! to = "installation"
//! label = "Installation"
//!
//! [[themeConfig.navbar.items]]
//! type = "doc"
//! docId = "root"
//! label = "Documentation"
//!
//! [[themeConfig.navbar.items]]
//! href = "https://github.com/parpy-lib/"
//! label = "GitHub"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::link::{LinkTarget, RawTarget, check_single_target};
use crate::config::schema::{Field, Schema, Walker};
use crate::config::{ErrorKind, FieldPath};

// ============================================================================
// Schema
// ============================================================================

const ITEM_FIELDS: &[Field] = &[
    Field::optional("type", Schema::Enum(&["default", "doc"])),
    Field::optional("to", Schema::String),
    Field::optional("docId", Schema::String),
    Field::optional("href", Schema::String),
    Field::optional("label", Schema::String),
    Field::optional("position", Schema::Enum(&["left", "right"])),
];

pub const NAVBAR_SCHEMA: Schema = Schema::Object(&[
    Field::optional("title", Schema::String),
    Field::optional("hideOnScroll", Schema::Bool),
    Field::optional("style", Schema::Enum(&["primary", "dark"])),
    Field::optional("items", Schema::List(&Schema::Custom(check_nav_item))),
]);

fn check_nav_item(walker: &mut Walker<'_>, value: &Value, path: &FieldPath) {
    let Some(map) = walker.check_object(value, ITEM_FIELDS, path) else {
        return;
    };
    let Some(key) = check_single_target(walker, map, &["to", "docId", "href"], path) else {
        return;
    };

    let is_doc_type = map.get("type").and_then(Value::as_str) == Some("doc");
    match (is_doc_type, key) {
        (true, "to" | "href") => walker.diag().error_with_hint(
            ErrorKind::InvalidValue,
            path.key("type"),
            format!("doc items link by `docId`, found `{key}`"),
            "remove `type = \"doc\"` or link with `docId`",
        ),
        (false, "docId") if map.contains_key("type") => walker.diag().error_with_hint(
            ErrorKind::InvalidValue,
            path.key("type"),
            "`docId` requires `type = \"doc\"`",
            "set `type` to \"doc\" or remove it",
        ),
        _ => {}
    }

    if key != "docId" && !map.contains_key("label") {
        walker.diag().error(
            ErrorKind::MissingField,
            path.key("label"),
            format!("items linking by `{key}` need a label"),
        );
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub hide_on_scroll: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NavbarStyle>,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    Primary,
    Dark,
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

/// One clickable navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNavItem", into = "RawNavItem")]
pub struct NavItem {
    /// Always set for route and external links, optional for doc links.
    pub label: Option<String>,
    pub position: Position,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ItemType {
    #[default]
    Default,
    Doc,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNavItem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<ItemType>,
    #[serde(flatten)]
    target: RawTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    position: Position,
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = String;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        let target = raw.target.into_target()?;
        let is_doc = matches!(target, LinkTarget::Doc(_));
        if is_doc != (raw.kind.unwrap_or_default() == ItemType::Doc) && raw.kind.is_some() {
            return Err("item `type` does not match its link target".into());
        }
        if !is_doc && raw.label.is_none() {
            return Err("route and external items need a label".into());
        }
        Ok(Self {
            label: raw.label,
            position: raw.position,
            target,
        })
    }
}

impl From<NavItem> for RawNavItem {
    fn from(item: NavItem) -> Self {
        let kind = matches!(item.target, LinkTarget::Doc(_)).then_some(ItemType::Doc);
        Self {
            kind,
            target: RawTarget::from_target(item.target),
            label: item.label,
            position: item.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::validate;
    use serde_json::json;

    fn errors(items: Value) -> Vec<(ErrorKind, String)> {
        validate(&json!({ "items": items }), &NAVBAR_SCHEMA)
            .err()
            .map(|d| {
                d.errors()
                    .iter()
                    .map(|e| (e.kind, e.field.as_str().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_item_variants() {
        let value = json!({
            "title": "ParPy",
            "items": [
                { "to": "installation", "position": "left", "label": "Installation" },
                { "type": "doc", "docId": "root", "position": "left", "label": "Documentation" },
                { "href": "https://github.com/parpy-lib/", "label": "GitHub", "position": "right" },
            ]
        });
        assert!(validate(&value, &NAVBAR_SCHEMA).is_ok());

        let navbar: NavbarConfig = serde_json::from_value(value).unwrap();
        assert_eq!(navbar.items[0].target, LinkTarget::Route("installation".into()));
        assert_eq!(navbar.items[1].target, LinkTarget::Doc("root".into()));
        assert_eq!(navbar.items[2].position, Position::Right);
    }

    #[test]
    fn test_target_rules() {
        assert_eq!(
            errors(json!([{ "label": "x" }])),
            [(ErrorKind::MissingField, "items[0]".to_string())]
        );
        assert_eq!(
            errors(json!([{ "to": "/a", "href": "https://a.dev", "label": "x" }])),
            [(ErrorKind::InvalidValue, "items[0]".to_string())]
        );
        assert_eq!(
            errors(json!([{ "to": "/a" }])),
            [(ErrorKind::MissingField, "items[0].label".to_string())]
        );
        assert_eq!(
            errors(json!([{ "type": "doc", "to": "/a", "label": "x" }])),
            [(ErrorKind::InvalidValue, "items[0].type".to_string())]
        );
        assert_eq!(
            errors(json!([{ "type": "default", "docId": "root" }])),
            [(ErrorKind::InvalidValue, "items[0].type".to_string())]
        );
        assert!(errors(json!([{ "docId": "root" }])).is_empty());
    }

    #[test]
    fn test_position_must_be_known() {
        assert_eq!(
            errors(json!([{ "to": "/a", "label": "x", "position": "middle" }])),
            [(ErrorKind::InvalidValue, "items[0].position".to_string())]
        );
    }

    #[test]
    fn test_serialized_item_is_schema_valid() {
        let item = NavItem {
            label: None,
            position: Position::Left,
            target: LinkTarget::Doc("root".into()),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "doc");
        assert_eq!(value["docId"], "root");
        assert!(validate(&json!({ "items": [value] }), &NAVBAR_SCHEMA).is_ok());
    }
}
