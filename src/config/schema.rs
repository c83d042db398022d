//! Recognized-options schema and the validator that walks raw config values.
//!
//! Sections declare their accepted keys as `const` [`Schema`] trees next to
//! their typed structs. The [`Walker`] checks a raw `serde_json::Value`
//! against such a tree and collects every problem instead of stopping at the
//! first one.
//!
//! ```text
//! raw value ──► Walker ──► ConfigDiagnostics (all problems, with paths)
//!                   │
//!                   └──► ConfigLayer (only when no problems were found)
//! ```

use serde_json::{Map, Value};

use super::layer::ConfigLayer;
use super::types::{ConfigDiagnostics, ErrorKind, FieldPath};
use super::util::extract_url_path;

/// Shape of an accepted config value.
#[derive(Debug, Clone, Copy)]
pub enum Schema {
    Bool,
    String,
    /// Integer greater than zero.
    PositiveInt,
    /// One of a fixed set of strings.
    Enum(&'static [&'static str]),
    /// Absolute http(s) URL without a sub-path.
    SiteUrl,
    /// Path prefix starting with `/`.
    BaseUrl,
    /// Ordered list. Items are replaced wholesale on merge, so they are
    /// always checked as complete values.
    List(&'static Schema),
    /// Object with a closed set of keys.
    Object(&'static [Field]),
    /// `true`/`false` or an options object.
    Toggle(&'static [Field]),
    /// Values with rules a plain tree cannot express.
    Custom(fn(&mut Walker<'_>, &Value, &FieldPath)),
}

/// One recognized key of an object schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
        }
    }
}

/// Validate a complete user config: unknown keys, types, values and
/// required fields.
pub fn validate(value: &Value, schema: &Schema) -> Result<ConfigLayer, ConfigDiagnostics> {
    walk(value, schema, false)
}

/// Validate a partial layer (such as builtin defaults). Required fields of
/// objects may be absent; list items are still checked in full.
pub fn validate_layer(value: &Value, schema: &Schema) -> Result<ConfigLayer, ConfigDiagnostics> {
    walk(value, schema, true)
}

fn walk(value: &Value, schema: &Schema, partial: bool) -> Result<ConfigLayer, ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    Walker::new(&mut diag, partial).check(value, schema, &FieldPath::root());
    diag.into_result()?;
    Ok(ConfigLayer::from_checked(value.clone()))
}

/// Schema walker collecting diagnostics.
pub struct Walker<'a> {
    diag: &'a mut ConfigDiagnostics,
    partial: bool,
}

impl<'a> Walker<'a> {
    pub fn new(diag: &'a mut ConfigDiagnostics, partial: bool) -> Self {
        Self { diag, partial }
    }

    /// Diagnostics sink for custom rules.
    pub fn diag(&mut self) -> &mut ConfigDiagnostics {
        &mut *self.diag
    }

    /// Check `value` against `schema`.
    pub fn check(&mut self, value: &Value, schema: &Schema, path: &FieldPath) {
        match schema {
            Schema::Bool => {
                self.expect(value.is_boolean(), value, path, "boolean");
            }
            Schema::String => {
                self.expect(value.is_string(), value, path, "string");
            }
            Schema::PositiveInt => self.check_positive_int(value, path),
            Schema::Enum(names) => self.check_enum(value, names, path),
            Schema::SiteUrl => self.check_site_url(value, path),
            Schema::BaseUrl => self.check_base_url(value, path),
            Schema::List(item) => self.check_list(value, item, path),
            Schema::Object(fields) => {
                self.check_object(value, fields, path);
            }
            Schema::Toggle(fields) => {
                if !value.is_boolean() {
                    if value.is_object() {
                        self.check_object(value, fields, path);
                    } else {
                        self.type_mismatch(value, path, "boolean or object");
                    }
                }
            }
            Schema::Custom(rule) => rule(self, value, path),
        }
    }

    /// Check an object against a closed set of fields.
    ///
    /// Returns the map when `value` is an object so custom rules can apply
    /// cross-field checks afterwards.
    pub fn check_object<'v>(
        &mut self,
        value: &'v Value,
        fields: &[Field],
        path: &FieldPath,
    ) -> Option<&'v Map<String, Value>> {
        let Some(map) = value.as_object() else {
            self.type_mismatch(value, path, "object");
            return None;
        };

        for (key, child) in map {
            match fields.iter().find(|f| f.name == key) {
                Some(field) => self.check(child, &field.schema, &path.key(key)),
                None => self.diag.error_with_hint(
                    ErrorKind::UnknownField,
                    path.key(key),
                    format!("unknown field `{key}`"),
                    format!("expected one of: {}", quoted_list(fields.iter().map(|f| f.name))),
                ),
            }
        }

        if !self.partial {
            for field in fields.iter().filter(|f| f.required) {
                if !map.contains_key(field.name) {
                    self.diag.error(
                        ErrorKind::MissingField,
                        path.key(field.name),
                        "required field is not set",
                    );
                }
            }
        }

        Some(map)
    }

    fn check_list(&mut self, value: &Value, item: &Schema, path: &FieldPath) {
        let Some(items) = value.as_array() else {
            self.type_mismatch(value, path, "list");
            return;
        };
        let partial = std::mem::replace(&mut self.partial, false);
        for (i, child) in items.iter().enumerate() {
            self.check(child, item, &path.index(i));
        }
        self.partial = partial;
    }

    fn check_positive_int(&mut self, value: &Value, path: &FieldPath) {
        if !self.expect(value.is_number(), value, path, "positive integer") {
            return;
        }
        if !value.as_u64().is_some_and(|n| n > 0) {
            self.diag.error(
                ErrorKind::InvalidValue,
                path.clone(),
                format!("`{value}` is not a positive integer"),
            );
        }
    }

    fn check_enum(&mut self, value: &Value, names: &[&str], path: &FieldPath) {
        let Some(s) = value.as_str() else {
            self.type_mismatch(value, path, "string");
            return;
        };
        if !names.contains(&s) {
            self.diag.error_with_hint(
                ErrorKind::InvalidValue,
                path.clone(),
                format!("`{s}` is not an accepted value"),
                format!("use one of: {}", quoted_list(names.iter().copied())),
            );
        }
    }

    fn check_site_url(&mut self, value: &Value, path: &FieldPath) {
        const HINT: &str = "use format like https://example.com";

        let Some(raw) = value.as_str() else {
            self.type_mismatch(value, path, "string");
            return;
        };
        match url::Url::parse(raw) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    self.diag.error_with_hint(
                        ErrorKind::InvalidValue,
                        path.clone(),
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        HINT,
                    );
                } else if parsed.host_str().is_none() {
                    self.diag.error_with_hint(
                        ErrorKind::InvalidValue,
                        path.clone(),
                        "URL must have a valid host",
                        HINT,
                    );
                } else if let Some(sub) = extract_url_path(raw)
                    && !sub.is_empty()
                {
                    self.diag.error_with_hint(
                        ErrorKind::InvalidValue,
                        path.clone(),
                        format!("URL must not contain a sub-path, found `/{sub}/`"),
                        format!("set `url` to the origin and `baseUrl` to \"/{sub}/\""),
                    );
                }
            }
            Err(e) => {
                self.diag.error_with_hint(
                    ErrorKind::InvalidValue,
                    path.clone(),
                    format!("invalid URL: {e}"),
                    HINT,
                );
            }
        }
    }

    fn check_base_url(&mut self, value: &Value, path: &FieldPath) {
        let Some(raw) = value.as_str() else {
            self.type_mismatch(value, path, "string");
            return;
        };
        if !raw.starts_with('/') || raw.contains("://") {
            self.diag.error_with_hint(
                ErrorKind::InvalidValue,
                path.clone(),
                format!("`{raw}` is not a path prefix"),
                "use a path starting with `/`, e.g. \"/\" or \"/docs/\"",
            );
        }
    }

    /// Record a type mismatch unless `ok`. Returns `ok`.
    pub fn expect(&mut self, ok: bool, value: &Value, path: &FieldPath, expected: &str) -> bool {
        if !ok {
            self.type_mismatch(value, path, expected);
        }
        ok
    }

    pub fn type_mismatch(&mut self, value: &Value, path: &FieldPath, expected: &str) {
        let message = format!("expected {expected}, found {}", value_kind(value));
        if value.is_null() {
            self.diag.error_with_hint(
                ErrorKind::TypeMismatch,
                path.clone(),
                message,
                "remove the key to use the default",
            );
        } else {
            self.diag
                .error(ErrorKind::TypeMismatch, path.clone(), message);
        }
    }
}

/// Human name of a JSON value's type.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn quoted_list<'s>(names: impl Iterator<Item = &'s str>) -> String {
    names
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
