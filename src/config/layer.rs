//! Schema-checked config layers and the section-aware merge.
//!
//! A layer is a raw config value that already passed the schema walk. Layers
//! stack: the user's config is overlaid onto the builtin defaults.
//!
//! | Shape in overlay | Shape in defaults | Result                         |
//! |------------------|-------------------|--------------------------------|
//! | object           | object            | merged key-by-key, recursively |
//! | list             | anything          | overlay list, wholesale        |
//! | scalar           | anything          | overlay scalar                 |
//! | absent           | anything          | defaults value                 |

use serde_json::{Map, Value};

/// A config value that passed the schema walk.
///
/// Only constructed by [`super::schema`] validation and by [`ConfigLayer::merge_over`],
/// so every layer is schema-valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLayer(Value);

impl ConfigLayer {
    pub(super) fn from_checked(value: Value) -> Self {
        Self(value)
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Overlay `self` onto `defaults`, returning a new layer.
    ///
    /// Neither input is modified. Lists are never concatenated: a list in
    /// `self` replaces the whole list in `defaults`.
    pub fn merge_over(&self, defaults: &ConfigLayer) -> ConfigLayer {
        ConfigLayer(merge_values(&self.0, &defaults.0))
    }
}

fn merge_values(overlay: &Value, defaults: &Value) -> Value {
    match (overlay, defaults) {
        (Value::Object(over), Value::Object(base)) => Value::Object(merge_maps(over, base)),
        _ => overlay.clone(),
    }
}

fn merge_maps(overlay: &Map<String, Value>, defaults: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::with_capacity(defaults.len().max(overlay.len()));

    // Defaults order first, overlay-only keys after
    for (key, base) in defaults {
        let value = match overlay.get(key) {
            Some(over) => merge_values(over, base),
            None => base.clone(),
        };
        merged.insert(key.clone(), value);
    }
    for (key, over) in overlay {
        if !defaults.contains_key(key) {
            merged.insert(key.clone(), over.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layer(value: Value) -> ConfigLayer {
        ConfigLayer::from_checked(value)
    }

    #[test]
    fn test_scalar_override() {
        let defaults = layer(json!({ "themeConfig": { "footer": { "style": "light" } } }));
        let user = layer(json!({ "themeConfig": { "footer": { "style": "dark" } } }));

        let merged = user.merge_over(&defaults);
        assert_eq!(merged.into_value()["themeConfig"]["footer"]["style"], "dark");
    }

    #[test]
    fn test_objects_merge_key_by_key() {
        let defaults = layer(json!({
            "themeConfig": { "footer": { "style": "light", "links": [] } }
        }));
        let user = layer(json!({ "themeConfig": { "footer": { "copyright": "me" } } }));

        let merged = user.merge_over(&defaults).into_value();
        let footer = &merged["themeConfig"]["footer"];
        assert_eq!(footer["style"], "light");
        assert_eq!(footer["copyright"], "me");
        assert_eq!(footer["links"], json!([]));
    }

    #[test]
    fn test_lists_replace_wholesale() {
        let defaults = layer(json!({
            "themeConfig": { "navbar": { "items": [
                { "to": "/a", "label": "A" },
                { "to": "/b", "label": "B" },
            ] } }
        }));
        let user = layer(json!({
            "themeConfig": { "navbar": { "items": [{ "href": "https://x.dev", "label": "X" }] } }
        }));

        let merged = user.merge_over(&defaults).into_value();
        assert_eq!(
            merged["themeConfig"]["navbar"]["items"],
            json!([{ "href": "https://x.dev", "label": "X" }])
        );
    }

    #[test]
    fn test_shape_change_replaces() {
        let defaults = layer(json!({ "blog": { "path": "blog" } }));
        let user = layer(json!({ "blog": false }));
        assert_eq!(user.merge_over(&defaults).into_value()["blog"], json!(false));
    }

    #[test]
    fn test_inputs_untouched() {
        let defaults = layer(json!({ "a": { "b": 1 } }));
        let user = layer(json!({ "a": { "c": 2 } }));
        let before = (defaults.clone(), user.clone());

        let _ = user.merge_over(&defaults);
        assert_eq!((defaults, user), before);
    }
}
