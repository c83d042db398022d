//! `themeConfig.footer` section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::link::{LinkTarget, RawTarget, check_single_target};
use crate::config::schema::{Field, Schema, Walker};
use crate::config::{ErrorKind, FieldPath};

const ITEM_FIELDS: &[Field] = &[
    Field::required("label", Schema::String),
    Field::optional("to", Schema::String),
    Field::optional("href", Schema::String),
];

const COLUMN_SCHEMA: Schema = Schema::Object(&[
    Field::required("title", Schema::String),
    Field::optional("items", Schema::List(&Schema::Custom(check_footer_item))),
]);

pub const FOOTER_SCHEMA: Schema = Schema::Object(&[
    Field::optional("style", Schema::Enum(&["light", "dark"])),
    Field::optional("links", Schema::List(&COLUMN_SCHEMA)),
    Field::optional("copyright", Schema::String),
]);

fn check_footer_item(walker: &mut Walker<'_>, value: &Value, path: &FieldPath) {
    if let Some(map) = walker.check_object(value, ITEM_FIELDS, path) {
        check_single_target(walker, map, &["to", "href"], path);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    /// Template; `{year}` is expanded on display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl FooterConfig {
    /// Copyright line with `{year}` replaced.
    pub fn copyright_text(&self, year: i32) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|template| template.replace("{year}", &year.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterItem>,
}

/// Footer entry. The target is a route or an external link, never a doc id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFooterItem", into = "RawFooterItem")]
pub struct FooterItem {
    pub label: String,
    pub target: LinkTarget,
}

#[derive(Serialize, Deserialize)]
struct RawFooterItem {
    label: String,
    #[serde(flatten)]
    target: RawTarget,
}

impl TryFrom<RawFooterItem> for FooterItem {
    type Error = String;

    fn try_from(raw: RawFooterItem) -> Result<Self, Self::Error> {
        match raw.target.into_target()? {
            LinkTarget::Doc(_) => Err("footer items link by `to` or `href`".into()),
            target => Ok(Self {
                label: raw.label,
                target,
            }),
        }
    }
}

impl From<FooterItem> for RawFooterItem {
    fn from(item: FooterItem) -> Self {
        Self {
            label: item.label,
            target: RawTarget::from_target(item.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::validate;
    use serde_json::json;

    #[test]
    fn test_footer_parses() {
        let value = json!({
            "style": "dark",
            "links": [
                { "title": "Documentation", "items": [
                    { "label": "Tutorials", "to": "/docs/tutorials" },
                ] },
                { "title": "Links", "items": [
                    { "label": "GitHub", "href": "https://github.com/parpy-lib/" },
                ] },
            ],
            "copyright": "Copyright © {year} Lars Hummelgren",
        });
        assert!(validate(&value, &FOOTER_SCHEMA).is_ok());

        let footer: FooterConfig = serde_json::from_value(value).unwrap();
        assert_eq!(footer.style, FooterStyle::Dark);
        assert_eq!(
            footer.links[1].items[0].target,
            LinkTarget::External("https://github.com/parpy-lib/".into())
        );
        assert_eq!(
            footer.copyright_text(2025).as_deref(),
            Some("Copyright © 2025 Lars Hummelgren")
        );
    }

    #[test]
    fn test_doc_id_not_allowed_in_footer() {
        let value = json!({ "links": [{ "title": "t", "items": [{ "label": "x", "docId": "root" }] }] });
        let diag = validate(&value, &FOOTER_SCHEMA).unwrap_err();
        let kinds: Vec<_> = diag.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ErrorKind::UnknownField, ErrorKind::MissingField]);
        assert_eq!(diag.errors()[0].field.as_str(), "links[0].items[0].docId");
    }

    #[test]
    fn test_empty_target_rejected() {
        let value = json!({ "links": [{ "title": "t", "items": [{ "label": "x", "to": " " }] }] });
        let diag = validate(&value, &FOOTER_SCHEMA).unwrap_err();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].kind, ErrorKind::InvalidValue);
        assert_eq!(diag.errors()[0].field.as_str(), "links[0].items[0].to");
    }

    #[test]
    fn test_missing_column_title() {
        let diag = validate(&json!({ "links": [{ "items": [] }] }), &FOOTER_SCHEMA).unwrap_err();
        assert_eq!(diag.errors()[0].kind, ErrorKind::MissingField);
        assert_eq!(diag.errors()[0].field.as_str(), "links[0].title");
    }
}
