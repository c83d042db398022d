//! `themeConfig.prism` section: code highlighting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::config::schema::{Field, Schema, Walker};
use crate::config::{ErrorKind, FieldPath};

pub const PRISM_SCHEMA: Schema = Schema::Object(&[
    Field::optional(
        "additionalLanguages",
        Schema::List(&Schema::Custom(check_language)),
    ),
    Field::optional("theme", Schema::String),
    Field::optional("darkTheme", Schema::String),
]);

fn check_language(walker: &mut Walker<'_>, value: &Value, path: &FieldPath) {
    let Some(lang) = value.as_str() else {
        walker.type_mismatch(value, path, "string");
        return;
    };
    let valid = !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-+#_".contains(c));
    if !valid {
        walker.diag().error_with_hint(
            ErrorKind::InvalidValue,
            path.clone(),
            format!("`{lang}` is not a language id"),
            "use lowercase ids like \"bash\" or \"cpp\"",
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrismConfig {
    pub additional_languages: BTreeSet<String>,
    /// Light theme name, looked up in the theme registry.
    pub theme: String,
    /// Dark theme name. Falls back to `theme` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            additional_languages: BTreeSet::new(),
            theme: "palenight".into(),
            dark_theme: None,
        }
    }
}
