//! Navigation link targets shared by navbar and footer items.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::config::schema::Walker;
use crate::config::{ErrorKind, FieldPath};

/// Where a navigation entry points.
///
/// Exactly one of the raw keys `to`, `docId` or `href` produces a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// Site route, `to` (e.g. `/docs/intro` or `installation`).
    Route(String),
    /// Documentation page by stable id, `docId`.
    Doc(String),
    /// External URL, `href`. Never validated.
    External(String),
}

impl LinkTarget {
    /// The raw key this target is written under.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Route(_) => "to",
            Self::Doc(_) => "docId",
            Self::External(_) => "href",
        }
    }

    /// The raw target value.
    pub fn value(&self) -> &str {
        match self {
            Self::Route(v) | Self::Doc(v) | Self::External(v) => v,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = \"{}\"", self.key(), self.value())
    }
}

/// Raw `{to | docId | href}` triple as it appears in config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RawTarget {
    pub fn into_target(self) -> Result<LinkTarget, String> {
        match (self.to, self.doc_id, self.href) {
            (Some(to), None, None) => Ok(LinkTarget::Route(to)),
            (None, Some(id), None) => Ok(LinkTarget::Doc(id)),
            (None, None, Some(href)) => Ok(LinkTarget::External(href)),
            _ => Err("exactly one of `to`, `docId` or `href` must be set".into()),
        }
    }

    pub fn from_target(target: LinkTarget) -> Self {
        match target {
            LinkTarget::Route(to) => Self {
                to: Some(to),
                ..Self::default()
            },
            LinkTarget::Doc(id) => Self {
                doc_id: Some(id),
                ..Self::default()
            },
            LinkTarget::External(href) => Self {
                href: Some(href),
                ..Self::default()
            },
        }
    }
}

/// Enforce the exactly-one-of rule on an already walked item object.
///
/// Returns the key that is set when the rule holds.
pub(super) fn check_single_target(
    walker: &mut Walker<'_>,
    map: &Map<String, Value>,
    keys: &[&'static str],
    path: &FieldPath,
) -> Option<&'static str> {
    let present: Vec<_> = keys.iter().copied().filter(|k| map.contains_key(*k)).collect();
    let listed = keys
        .iter()
        .map(|k| format!("`{k}`"))
        .collect::<Vec<_>>()
        .join(" or ");

    match present.as_slice() {
        [key] => {
            if map.get(*key).and_then(Value::as_str).is_some_and(|v| v.trim().is_empty()) {
                walker.diag().error(
                    ErrorKind::InvalidValue,
                    path.key(key),
                    "link target must not be empty",
                );
                return None;
            }
            Some(key)
        }
        [] => {
            walker.diag().error(
                ErrorKind::MissingField,
                path.clone(),
                format!("link target missing, set {listed}"),
            );
            None
        }
        many => {
            walker.diag().error_with_hint(
                ErrorKind::InvalidValue,
                path.clone(),
                format!(
                    "only one link target may be set, found {}",
                    many.iter()
                        .map(|k| format!("`{k}`"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                format!("keep exactly one of {listed}"),
            );
            None
        }
    }
}
